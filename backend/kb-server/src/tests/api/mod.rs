mod error;
mod extractors;
mod guard;
mod params;
