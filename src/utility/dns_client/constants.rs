/// Receive buffer for UDP answers.
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;
