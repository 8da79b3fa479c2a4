#[cfg(test)]
mod tests {
    use crate::domain::dashboard::errors::RenderError;
    use crate::domain::dashboard::query::DashboardQuery;
    use crate::domain::dashboard::result::{QueryResult, Value};
    use crate::domain::dashboard::view::{DashboardView, Panel};

    fn cities() -> QueryResult {
        QueryResult::new(
            vec!["city".to_string()],
            vec![
                vec![Value::from("sao paulo")],
                vec![Value::from("campinas")],
                vec![Value::from("curitiba")],
            ],
        )
        .unwrap()
    }

    fn states() -> QueryResult {
        QueryResult::new(
            vec!["state".to_string(), "num_customers".to_string()],
            vec![
                vec![Value::from("SP"), Value::Integer(41746)],
                vec![Value::from("RJ"), Value::Integer(12852)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_query_renders_every_row() {
        let view = DashboardView::render(DashboardQuery::UniqueCustomerCities, cities()).unwrap();
        assert_eq!(view.title, "Unique Cities Where Customers Are Located");
        assert_eq!(view.table().unwrap().row_count(), 3);
    }

    #[test]
    fn test_scalar_query_renders_first_cell() {
        let result =
            QueryResult::new(vec!["COUNT(order_id)".to_string()], vec![vec![Value::Integer(45101)]])
                .unwrap();
        let view = DashboardView::render(DashboardQuery::Orders2017, result).unwrap();

        match view.panel {
            Panel::Scalar { text, value } => {
                assert_eq!(text, "Total orders placed in 2017: 45101");
                assert_eq!(value, Value::Integer(45101));
            }
            other => panic!("Expected scalar panel, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_query_with_empty_result_renders_blank_value() {
        let view = DashboardView::render(DashboardQuery::Orders2017, QueryResult::empty()).unwrap();
        match view.panel {
            Panel::Scalar { text, value } => {
                assert_eq!(text, "Total orders placed in 2017: ");
                assert!(value.is_null());
            }
            other => panic!("Expected scalar panel, got {:?}", other),
        }
    }

    #[test]
    fn test_pie_query_renders_table_and_chart() {
        let view = DashboardView::render(DashboardQuery::CustomersPerState, states()).unwrap();
        match &view.panel {
            Panel::TableWithPie { table, chart } => {
                assert_eq!(table.row_count(), 2);
                assert_eq!(chart.slices.len(), 2);
                assert_eq!(chart.slices[0].name, "SP");
            }
            other => panic!("Expected pie panel, got {:?}", other),
        }
    }

    #[test]
    fn test_bar_query_with_wrong_columns_fails() {
        let err = DashboardView::render(DashboardQuery::SalesPerCategory, cities()).unwrap_err();
        assert_eq!(err, RenderError::MissingColumn("category".to_string()));
    }

    #[test]
    fn test_unavailable_view_has_no_table() {
        let view = DashboardView::unavailable(DashboardQuery::SalesPerCategory);
        assert!(view.is_unavailable());
        assert!(view.table().is_none());
        assert_eq!(view.title, "Total Sales Per Category");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = DashboardView::render(DashboardQuery::CustomersPerState, states()).unwrap();
        let second = DashboardView::render(DashboardQuery::CustomersPerState, states()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_serializes_with_panel_kind() {
        let result = QueryResult::new(
            vec!["percentage_paid_installments".to_string()],
            vec![vec![Value::Float(0.0)]],
        )
        .unwrap();
        let view = DashboardView::render(DashboardQuery::InstallmentPercentage, result).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["query"], "installment-percentage");
        assert_eq!(json["panel"]["kind"], "table");
        assert_eq!(json["panel"]["table"]["rows"][0][0], 0.0);
    }
}
