/// Data layer: cell types, loading, grouping and JSON output.
///
/// Architecture:
/// ```text
///        .csv
///          │
///          ▼
///   ┌────────────┐
///   │  loader    │  parse file → Matrix / Vec<PixelPair>
///   └────────────┘   (infer: per-column cell kinds)
///          │
///          ▼
///   ┌────────────┐
///   │   grid     │  448 samples → 64 × 7 PixelGrid
///   └────────────┘
///          │
///          ▼
///   ┌────────────┐
///   │  writer    │  compact JSON → .json
///   └────────────┘
/// ```

pub mod grid;
pub mod infer;
pub mod loader;
pub mod model;
pub mod writer;
