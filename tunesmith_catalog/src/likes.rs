// Per-item like counts.
//
// A page's target average `avg` becomes `floor(avg)` or `floor(avg) + 1` per
// item, the latter with probability `frac(avg)`, so the page average tends
// to `avg`. The boundary targets 0 and 10 return immediately without
// touching a stream.

use crate::seed::item_stream;

/// Upper bound of the likes scale.
pub const MAX_LIKES: f64 = 10.0;

/// Like count for one item.
pub fn generate_likes(avg: f64, item_seed: i64) -> u32 {
    if avg <= 0.0 {
        return 0;
    }
    if avg >= MAX_LIKES {
        return MAX_LIKES as u32;
    }
    let whole = avg.floor();
    let frac = avg - whole;
    let extra = u32::from(item_stream(item_seed).random_bool(frac));
    whole as u32 + extra
}
