// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to complete a run.
//
// Rules for this layer:
//   - No text-cleaning rules here (that's Layer 4)
//   - No argument parsing or printing (that's Layer 1)
//   - No direct file formats (Layers 4 and 6)
//   - Only workflow coordination

// The one workflow: load → clean → count → write
pub mod preprocess_use_case;
