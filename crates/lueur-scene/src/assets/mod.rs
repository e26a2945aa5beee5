pub mod loading;
pub mod manifest;
pub mod mesh;
