/// Network adapters for fetching indexes from package mirrors
mod mirror_client;

pub use mirror_client::MirrorIndexClient;
