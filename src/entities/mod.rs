pub mod prelude;

pub mod directors;
pub mod genres;
pub mod movies;
