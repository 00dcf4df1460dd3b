mod state;

pub use state::Response;
