//! Address display helpers.

/// Length of a `0x`-prefixed hex address.
pub const ADDRESS_LEN: usize = 42;

const PREFIX_LEN: usize = 5;
const SUFFIX_LEN: usize = 4;

/// Truncates an address to `0x123...abcd` form.
///
/// Input shorter than the truncated form is returned unchanged.
pub fn shorten_address(address: &str) -> String {
    if !address.is_ascii() || address.len() <= PREFIX_LEN + SUFFIX_LEN {
        return address.to_string();
    }
    format!(
        "{}...{}",
        &address[..PREFIX_LEN],
        &address[address.len() - SUFFIX_LEN..]
    )
}

/// Builds the block explorer link for an address.
pub fn explorer_address_url(base: &str, address: &str) -> String {
    format!("{}/address/{}", base.trim_end_matches('/'), address)
}
