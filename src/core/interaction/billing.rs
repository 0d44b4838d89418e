//! Monthly/yearly pricing toggle

use crate::core::spec::{BillingMode, PricingPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly",
        }
    }

    /// Suffix printed after the amount
    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }

    pub fn price_of(&self, plan: &PricingPlan) -> f64 {
        match self {
            BillingPeriod::Monthly => plan.monthly_price,
            BillingPeriod::Yearly => plan.yearly_price,
        }
    }

    /// Delegated action name of the toggle button selecting this period
    pub fn action(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "billing-monthly",
            BillingPeriod::Yearly => "billing-yearly",
        }
    }

    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "billing-monthly" => Some(BillingPeriod::Monthly),
            "billing-yearly" => Some(BillingPeriod::Yearly),
            _ => None,
        }
    }
}

/// Toggle state. A section pinned to one period ignores selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingToggle {
    mode: BillingMode,
    period: BillingPeriod,
}

impl BillingToggle {
    pub fn new(mode: BillingMode) -> Self {
        let period = match mode {
            BillingMode::Yearly => BillingPeriod::Yearly,
            BillingMode::Monthly | BillingMode::Both => BillingPeriod::Monthly,
        };
        Self { mode, period }
    }

    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Only `both` offers a choice
    pub fn is_interactive(&self) -> bool {
        self.mode == BillingMode::Both
    }

    /// Returns `true` if the displayed period changed
    pub fn select(&mut self, period: BillingPeriod) -> bool {
        if !self.is_interactive() || self.period == period {
            return false;
        }
        self.period = period;
        true
    }
}
