/// A single exchange candle. Times are exchange milliseconds since epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open_time: 0,
            open,
            high,
            low,
            close,
            volume,
            close_time: 0,
        }
    }

    pub fn with_times(mut self, open_time: i64, close_time: i64) -> Self {
        self.open_time = open_time;
        self.close_time = close_time;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: Option<u32>,
}
