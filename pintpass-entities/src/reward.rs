/// A redeemable voucher minted when a badge is newly unlocked.
///
/// `redeemed` is monotonic: once true it never reverts.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub id          : i64,
    pub badge_id    : i64,
    pub user_id     : i64,
    pub code        : String,
    pub details     : String,
    /// Days from issuance until the reward expires, if any.
    pub expiry_days : Option<u32>,
    pub redeemed    : bool,
}
