use borsh::{BorshDeserialize, BorshSerialize};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uint::construct_uint;

/// Caller-chosen round identifier shared by the ledger and the draw coordinator.
pub type RoundId = u64;
/// Handle correlating an outbound randomness request with its callback.
pub type RequestId = u64;
pub type WinningNumbers = Vec<u8>;

/// Largest number of picks an entry or a draw can carry.
pub const MAX_PICK_COUNT: u8 = 9;
/// Upper bound of the configurable draw range.
pub const MAX_RANGE: u8 = 99;

construct_uint!{
    /// 256-bit unsigned integer
    #[derive(BorshDeserialize, BorshSerialize)]
    pub struct U256(4);
}

pub type RandomWord = U256;

// JSON carries 256-bit words as decimal strings, the same way `U128` does.
impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        U256::from_dec_str(&s).map_err(|err| de::Error::custom(format!("invalid U256 {}: {:?}", s, err)))
    }
}

/// How many unique numbers a draw picks and from which range.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameFormat {
    pub pick_count: u8,
    pub max_range: u8,
}

impl GameFormat {
    pub fn new(pick_count: u8, max_range: u8) -> Self {
        Self { pick_count, max_range }
    }

    pub fn is_valid(&self) -> bool {
        (1..=MAX_PICK_COUNT).contains(&self.pick_count)
            && self.pick_count <= self.max_range
            && self.max_range <= MAX_RANGE
    }
}
