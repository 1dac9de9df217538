pub mod donation;
pub mod emission;
pub mod employment;
pub mod news;
pub mod organization;
pub mod verification;
