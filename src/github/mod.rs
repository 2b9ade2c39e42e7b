pub mod asset;
pub mod github_client;
pub mod release;
pub mod release_request;

pub use asset::Asset;
pub use github_client::GithubClient;
pub use release::Release;
pub use release_request::ReleaseRequest;
