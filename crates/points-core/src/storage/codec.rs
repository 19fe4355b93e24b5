use crate::error::{Error, Result};
use crate::round::Round;

/// Encode rounds as a JSON array of `[team1_points, team1_extra, team2_points, team2_extra]`.
pub fn encode_rounds(rounds: &[Round]) -> Result<String> {
    Ok(serde_json::to_string(rounds)?)
}

/// Decode rounds from `encode_rounds` output.
///
/// Every row must hold exactly four non-negative integers.
pub fn decode_rounds(data: &str) -> Result<Vec<Round>> {
    let data = data.trim();
    if data.is_empty() {
        return Err(Error::Decode("empty encoding".to_string()));
    }
    serde_json::from_str(data).map_err(|e| Error::Decode(e.to_string()))
}
