use crate::obsolescence::domain::ChartData;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Rendered chart snapshot, embedded into the exported document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ChartImage {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// `data:` URI carrying the base64-encoded image
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// ChartRenderer port for drawing the obsolescence bar chart
pub trait ChartRenderer {
    /// Draws one bar per category of the chart data
    ///
    /// # Errors
    /// Returns an error if the image cannot be produced
    fn render(&self, chart: &ChartData) -> Result<ChartImage>;
}
