use league_core::CompetitorSpec;
use serde::Deserialize;

const STATIC_COMPETITORS_JSON: &str = include_str!("../data/competitors.json");

#[derive(Deserialize)]
pub struct CompetitorEntity {
    pub name: String,
    pub strength: u8,
}

impl From<CompetitorEntity> for CompetitorSpec {
    fn from(entity: CompetitorEntity) -> Self {
        CompetitorSpec::new(entity.name, entity.strength)
    }
}

pub struct CompetitorLoader;

impl CompetitorLoader {
    /// Default league line-up shipped with the binary.
    pub fn load() -> serde_json::Result<Vec<CompetitorSpec>> {
        Self::parse(STATIC_COMPETITORS_JSON)
    }

    pub fn parse(json: &str) -> serde_json::Result<Vec<CompetitorSpec>> {
        let entities: Vec<CompetitorEntity> = serde_json::from_str(json)?;
        Ok(entities.into_iter().map(CompetitorSpec::from).collect())
    }
}
