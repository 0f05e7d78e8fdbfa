// Survey authoring, public response collection and spreadsheet export.

pub mod export;
pub mod handlers;
pub mod ids;
pub mod store;
pub mod validation;
