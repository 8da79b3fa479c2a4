//! DashboardQuery enum: the closed catalogue of reporting queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownQuery;

/// How the result of a query is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    /// Full result as a table.
    Table,
    /// Single value at row 0, column 0 as a line of text.
    Scalar,
    /// Table followed by a bar chart.
    TableWithBar,
    /// Table followed by a pie chart.
    TableWithPie,
}

/// Column mapping for a chart drawn from a two-column result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
    /// Category (bar) or slice-name (pie) column.
    pub label_field: &'static str,
    /// Height (bar) or slice-size (pie) column.
    pub value_field: &'static str,
}

const UNIQUE_CUSTOMER_CITIES_SQL: &str =
    "SELECT DISTINCT(customer_city) AS city FROM customers";

const ORDERS_2017_SQL: &str = "SELECT COUNT(order_id) \
     FROM orders \
     WHERE YEAR(order_purchase_timestamp) = 2017";

const SALES_PER_CATEGORY_SQL: &str = "SELECT UPPER(products.product_category) AS category, \
     ROUND(SUM(payments.payment_value), 2) AS sales \
     FROM products \
     JOIN order_items ON products.product_id = order_items.product_id \
     JOIN payments ON payments.order_id = order_items.order_id \
     GROUP BY category";

const INSTALLMENT_PERCENTAGE_SQL: &str = "SELECT \
     ROUND((SUM(CASE WHEN payment_type = 'Installments' THEN 1 ELSE 0 END) / COUNT(*)) * 100, 2) \
     AS percentage_paid_installments \
     FROM payments";

const CUSTOMERS_PER_STATE_SQL: &str = "SELECT customer_state AS state, \
     COUNT(customer_id) AS num_customers \
     FROM customers \
     GROUP BY customer_state";

/// One of the five fixed reporting queries.
///
/// Every variant carries its own static SQL and render kind, so there is no
/// unmatched case to handle once a value of this type exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardQuery {
    /// Preselected, like the first entry of a select box.
    #[default]
    UniqueCustomerCities,
    #[serde(rename = "orders-2017")]
    Orders2017,
    SalesPerCategory,
    InstallmentPercentage,
    CustomersPerState,
}

impl DashboardQuery {
    /// All queries in selector order.
    pub const ALL: [DashboardQuery; 5] = [
        DashboardQuery::UniqueCustomerCities,
        DashboardQuery::Orders2017,
        DashboardQuery::SalesPerCategory,
        DashboardQuery::InstallmentPercentage,
        DashboardQuery::CustomersPerState,
    ];

    /// Returns all queries in selector order.
    pub fn all() -> &'static [DashboardQuery] {
        &Self::ALL
    }

    /// Stable identifier used in URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            DashboardQuery::UniqueCustomerCities => "unique-customer-cities",
            DashboardQuery::Orders2017 => "orders-2017",
            DashboardQuery::SalesPerCategory => "sales-per-category",
            DashboardQuery::InstallmentPercentage => "installment-percentage",
            DashboardQuery::CustomersPerState => "customers-per-state",
        }
    }

    /// Text shown in the query selector.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardQuery::UniqueCustomerCities => {
                "List all unique cities where customers are located."
            }
            DashboardQuery::Orders2017 => "Count the number of orders placed in 2017.",
            DashboardQuery::SalesPerCategory => "Find the total sales per category.",
            DashboardQuery::InstallmentPercentage => {
                "Calculate the percentage of orders that were paid in installments."
            }
            DashboardQuery::CustomersPerState => "Count the number of customers from each state.",
        }
    }

    /// Subheader shown above the result.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardQuery::UniqueCustomerCities => "Unique Cities Where Customers Are Located",
            DashboardQuery::Orders2017 => "Total Orders in 2017",
            DashboardQuery::SalesPerCategory => "Total Sales Per Category",
            DashboardQuery::InstallmentPercentage => "Percentage of Orders Paid in Installments",
            DashboardQuery::CustomersPerState => "Number of Customers From Each State",
        }
    }

    /// Static, parameterless SQL text.
    pub fn sql(&self) -> &'static str {
        match self {
            DashboardQuery::UniqueCustomerCities => UNIQUE_CUSTOMER_CITIES_SQL,
            DashboardQuery::Orders2017 => ORDERS_2017_SQL,
            DashboardQuery::SalesPerCategory => SALES_PER_CATEGORY_SQL,
            DashboardQuery::InstallmentPercentage => INSTALLMENT_PERCENTAGE_SQL,
            DashboardQuery::CustomersPerState => CUSTOMERS_PER_STATE_SQL,
        }
    }

    pub fn render_kind(&self) -> RenderKind {
        match self {
            DashboardQuery::UniqueCustomerCities => RenderKind::Table,
            DashboardQuery::Orders2017 => RenderKind::Scalar,
            DashboardQuery::SalesPerCategory => RenderKind::TableWithBar,
            DashboardQuery::InstallmentPercentage => RenderKind::Table,
            DashboardQuery::CustomersPerState => RenderKind::TableWithPie,
        }
    }

    /// Chart column mapping, for the two aggregate queries.
    pub fn chart(&self) -> Option<ChartSpec> {
        match self {
            DashboardQuery::SalesPerCategory => Some(ChartSpec {
                title: "Total Sales Per Category",
                label_field: "category",
                value_field: "sales",
            }),
            DashboardQuery::CustomersPerState => Some(ChartSpec {
                title: "Customer Distribution by State",
                label_field: "state",
                value_field: "num_customers",
            }),
            _ => None,
        }
    }

    /// Prefix placed before the value of a scalar query.
    pub fn scalar_caption(&self) -> Option<&'static str> {
        match self {
            DashboardQuery::Orders2017 => Some("Total orders placed in 2017"),
            _ => None,
        }
    }
}

impl fmt::Display for DashboardQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DashboardQuery {
    type Err = UnknownQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.slug() == s)
            .ok_or_else(|| UnknownQuery(s.to_string()))
    }
}
