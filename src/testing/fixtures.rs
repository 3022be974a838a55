/// Ten plain values with entries on both sides of zero and two repeats.
pub const SIMPLE: [f64; 10] = [3.4, 2.2, -1.8, 0.0, 7.3, -4.7, 1.6, 0.0, -3.0, -1.7];

/// Structured datum exercising boolean, integer and real fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub flag: bool,
    pub int: i64,
    pub double: f64,
    pub label: &'static str,
}

impl Record {
    pub const fn new(flag: bool, int: i64, double: f64, label: &'static str) -> Self {
        Self {
            flag,
            int,
            double,
            label,
        }
    }
}

/// The same values as [`SIMPLE`], paired with a flag and an integer weight
/// ranging from -2 to 7.
pub fn records() -> Vec<Record> {
    vec![
        Record::new(true, -2, 3.4, "one"),
        Record::new(false, -1, 2.2, "two"),
        Record::new(true, 0, -1.8, "three"),
        Record::new(false, 1, 0.0, "four"),
        Record::new(false, 2, 7.3, "five"),
        Record::new(false, 3, -4.7, "six"),
        Record::new(true, 4, 1.6, "seven"),
        Record::new(true, 5, 0.0, "eight"),
        Record::new(false, 6, -3.0, "nine"),
        Record::new(true, 7, -1.7, "ten"),
    ]
}
