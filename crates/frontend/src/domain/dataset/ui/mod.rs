mod form;
mod list;
mod upload;

pub use list::DatasetList;
