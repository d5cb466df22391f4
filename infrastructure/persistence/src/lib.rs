pub mod db;
pub mod seed;
pub mod barber {
    pub mod entity;
    pub mod repository;
}
pub mod promotion {
    pub mod entity;
    pub mod repository;
}
