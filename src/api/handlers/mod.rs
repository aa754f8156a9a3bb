pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;
