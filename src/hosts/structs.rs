/// One host:port endpoint to be probed.
///
/// The port is resolved against the run-wide default at construction, so
/// equality and deduplication work on the `(host, port)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub host: String,
    pub port: u16,
}

impl Candidate {
    pub fn new(host: &str, port: u16) -> Self {
        Candidate { host: host.to_string(), port }
    }
    /// The `host:port` form, used for request building and logging.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
