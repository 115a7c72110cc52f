use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plan {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub monthly_price: String,
    pub yearly_price: String,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn price(self, plan: &Plan) -> &str {
        match self {
            BillingCycle::Monthly => &plan.monthly_price,
            BillingCycle::Yearly => &plan.yearly_price,
        }
    }

    pub fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/mo",
            BillingCycle::Yearly => "/yr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::Catalog;

    #[test]
    fn cycle_switches_price_and_period() {
        let catalog = Catalog::load().unwrap();
        let student = catalog.plans.iter().find(|p| p.key == "student").unwrap();

        let cycle = BillingCycle::default();
        assert_eq!((cycle.price(student), cycle.period()), ("₹499", "/mo"));

        let cycle = cycle.toggled();
        assert_eq!((cycle.price(student), cycle.period()), ("₹4,999", "/yr"));
        assert_eq!(cycle.toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn exactly_one_popular_plan() {
        let catalog = Catalog::load().unwrap();
        let popular: Vec<_> = catalog.plans.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].key, "enlightenment");
    }
}
