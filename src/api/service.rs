//! Service trait for the star/universe endpoints, so pages can be driven
//! by an in-memory implementation in tests.

use crate::error::Result;
use crate::types::{NewStar, Star, StarPage, Universe};
use async_trait::async_trait;

#[async_trait]
pub trait StarsApi: Send + Sync {
    /// One page of stars, optionally restricted to a universe.
    /// Page size is fixed server-side.
    async fn get_stars(&self, universe_id: Option<u64>, page: u32) -> Result<StarPage>;

    async fn get_universe(&self, id: u64) -> Result<Universe>;

    /// Fails with `AppError::NotFound` if the star does not exist
    async fn delete_star(&self, id: u64) -> Result<()>;

    async fn create_star(&self, star: &NewStar) -> Result<Star>;
}
