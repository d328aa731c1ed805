//! Image columns persist a relative path into external file storage, never
//! the bytes. One upload directory per kind of image.

pub const ACTOR_IMAGE_DIR: &str = "actors/";
pub const POSTER_DIR: &str = "movies/";
pub const SHOT_DIR: &str = "movie_shots/";

pub fn stored_path(dir: &str, file_name: &str) -> String {
    format!("{dir}{file_name}")
}
