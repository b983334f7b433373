/// Risk bands shown under the map. Fixed content, independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// Legend entries in display order.
pub const LEGEND: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    /// Tailwind background class for the colour dot.
    pub fn swatch_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "bg-red-500",
            RiskLevel::Medium => "bg-yellow-500",
            RiskLevel::Low => "bg-green-500",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::High => "Areas prone to severe flooding",
            RiskLevel::Medium => "Moderate flood possibility",
            RiskLevel::Low => "Relatively safe areas",
        }
    }
}
