pub mod analyser;
pub mod batch;
pub mod decision;
pub mod intensity;
pub mod kernel;
pub mod key;
pub mod record;
pub mod summary;
