pub mod detail;
pub mod search;

pub use detail::DetailView;
pub use search::SearchView;
