/// Largest supported competitor count.
///
/// Membership and survivor masks are `u32` bitmasks, and the engine needs
/// `(1 << n) - 1` as the full-bracket mask, so the count must stay safely
/// inside the mask width. 30 also keeps the full mask representable in a
/// native signed 32-bit integer for callers that store masks that way.
///
/// The DP itself is the real limit long before the mask is: a round's
/// frontier holds C(n, subSize) subtournaments, which peaks at C(n, n/2).
pub const MAX_COMPETITORS: usize = 30;
