//! Constants shared by the browse and matching surfaces.

pub const TOP_SUGGESTION_COUNT: usize = 5;

pub const DEFAULT_PHOTO_URL: &str =
    "https://profile-photos-1.s3.us-east-2.amazonaws.com/default.jpg";
