/// Transport layer for the StealthEX API client.
///
/// The kernel contains only transport logic and generic interfaces: the
/// [`HttpTransport`] seam over the network and the [`RestClient`] request
/// executor built on top of it. No domain types live here.
///
/// # Key Principles
///
/// 1. **Transport Only**: the kernel knows nothing about trades or endpoints
/// 2. **Pluggable**: the transport is trait-based and injectable
/// 3. **Observable**: tracing on the execution path, full dumps on demand
/// 4. **Testable**: stub transports drive the executor in tests
pub mod rest;
pub mod transport;

// Re-export key types for convenience
pub use rest::{RestClient, RestClientBuilder, RestClientConfig};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
