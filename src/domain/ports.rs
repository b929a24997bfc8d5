use crate::domain::model::Record;
use crate::utils::error::Result;

pub trait Source {
    fn build(&self) -> Result<Record>;
}

pub trait Sink {
    fn emit(&self, line: &str) -> Result<()>;
}
