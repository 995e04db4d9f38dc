/// The fixed set of per-company sub-scores, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Vc,
    FundingValuation,
    Raised,
    RecentFinancing,
    CompanyGrowth,
    EmergingVerticals,
    HqCity,
    FoundersGenders,
    FoundersIsSerial,
    FoundersCount,
}

pub const SCORE_ORDER: [ScoreKind; 10] = [
    ScoreKind::Vc,
    ScoreKind::FundingValuation,
    ScoreKind::Raised,
    ScoreKind::RecentFinancing,
    ScoreKind::CompanyGrowth,
    ScoreKind::EmergingVerticals,
    ScoreKind::HqCity,
    ScoreKind::FoundersGenders,
    ScoreKind::FoundersIsSerial,
    ScoreKind::FoundersCount,
];

impl ScoreKind {
    /// Output column label; also the key the weight configuration uses.
    pub fn label(self) -> &'static str {
        match self {
            ScoreKind::Vc => "VC Score",
            ScoreKind::FundingValuation => "Funding Valuation Score",
            ScoreKind::Raised => "Raised Score",
            ScoreKind::RecentFinancing => "Recent Financing Score",
            ScoreKind::CompanyGrowth => "Company Growth Score",
            ScoreKind::EmergingVerticals => "Emerging and Verticals Score",
            ScoreKind::HqCity => "HQ City Score",
            ScoreKind::FoundersGenders => "Founders Genders Score",
            ScoreKind::FoundersIsSerial => "Founders Is Serial Score",
            ScoreKind::FoundersCount => "Founders Count Score",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        SCORE_ORDER
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(label.trim()))
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ScoreKind::Vc => 0,
            ScoreKind::FundingValuation => 1,
            ScoreKind::Raised => 2,
            ScoreKind::RecentFinancing => 3,
            ScoreKind::CompanyGrowth => 4,
            ScoreKind::EmergingVerticals => 5,
            ScoreKind::HqCity => 6,
            ScoreKind::FoundersGenders => 7,
            ScoreKind::FoundersIsSerial => 8,
            ScoreKind::FoundersCount => 9,
        }
    }
}

/// One company's sub-scores, dense over [`SCORE_ORDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubScoreSet {
    values: [u8; SCORE_ORDER.len()],
}

impl SubScoreSet {
    pub fn set(&mut self, kind: ScoreKind, value: u8) {
        self.values[kind.index()] = value;
    }

    pub fn get(&self, kind: ScoreKind) -> u8 {
        self.values[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreKind, u8)> + '_ {
        SCORE_ORDER.iter().map(|k| (*k, self.values[k.index()]))
    }
}
