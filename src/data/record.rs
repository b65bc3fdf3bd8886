use serde::Deserialize;

/// Artist origin buckets used by the split layout. Anything outside the
/// fixed vocabulary normalizes to `Other` so every record has a split
/// target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    European,
    American,
    AfricanCaribbean,
    Other,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::European,
        Region::American,
        Region::AfricanCaribbean,
        Region::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::European => "European",
            Self::American => "American",
            Self::AfricanCaribbean => "African/Carribean",
            Self::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "European" => Self::European,
            "American" => Self::American,
            "African/Carribean" => Self::AfricanCaribbean,
            _ => Self::Other,
        }
    }
}

/// One row as it appears in the dataset files. All fields are textual
/// (the datasets are exported spreadsheets) and individually optional.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecord {
    #[serde(default, rename = "Rank")]
    pub rank: String,
    #[serde(default, rename = "Streams")]
    pub streams: String,
    #[serde(default, rename = "Song")]
    pub song: String,
    #[serde(default, rename = "Artist")]
    pub artist: String,
    #[serde(default, rename = "From")]
    pub from: String,
    #[serde(default, rename = "Date")]
    pub date: String,
}

#[derive(Clone, Debug)]
pub struct Record {
    pub rank: u32,
    /// Streams in millions, as published by the chart.
    pub streams: f64,
    pub title: String,
    pub artist: String,
    pub region: Region,
    pub year: i32,
}

impl Record {
    pub fn from_raw(raw: RawRecord) -> Self {
        Self {
            rank: raw.rank.trim().parse().unwrap_or(0),
            streams: parse_streams(&raw.streams),
            title: raw.song.trim().to_owned(),
            artist: raw.artist.trim().to_owned(),
            region: Region::parse(&raw.from),
            year: raw.date.trim().parse().unwrap_or(0),
        }
    }
}

// Malformed numbers become 0 instead of poisoning the radius scale and the
// charge force for every node in the collection.
fn parse_streams(raw: &str) -> f64 {
    let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}
