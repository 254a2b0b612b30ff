pub mod json;
pub mod types;
pub use types::*;
use async_trait::async_trait;

// The localStorage analogue: wallet balances plus user-created standing
// orders live here, never inside the engine.
#[async_trait]
pub trait ProfileStore {
    async fn load(&self) -> PersistResult<Option<Profile>>;
    async fn save(&mut self, profile: &Profile) -> PersistResult<()>;
}
