/// Bar chart input: one bar per category, in aggregation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    pub value: usize,
    /// Fill color; the renderer picks a neutral color when absent
    pub color: Option<String>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_value(&self) -> usize {
        self.bars.iter().map(|bar| bar.value).max().unwrap_or(0)
    }
}
