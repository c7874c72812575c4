#[cfg(test)]
mod tests {
    use account_cli::data::account::Account;
    use account_cli::data::account_view::AccountView;
    use account_cli::data::loader::{load_accounts_from_file, load_accounts_from_str};
    use account_cli::data::pager::paginate;
    use std::sync::Arc;

    fn sample_csv(rows: usize) -> String {
        let mut text = String::from("id,name,email,age,address,gender\n");
        for i in 1..=rows {
            let gender = if i % 2 == 0 { "male" } else { "female" };
            text.push_str(&format!(
                "{},User {},user{}@example.com,{},City {},{}\n",
                i,
                i,
                i,
                20 + (i % 40),
                i % 7,
                gender
            ));
        }
        text
    }

    #[test]
    fn test_text_to_records() {
        let accounts = load_accounts_from_str("id,name\n1,Alice\n2,\"Bo,b\"\n");
        assert_eq!(
            accounts,
            vec![
                Account {
                    id: 1,
                    name: "Alice".to_string(),
                    ..Account::default()
                },
                Account {
                    id: 2,
                    name: "Bo,b".to_string(),
                    ..Account::default()
                },
            ]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.csv");
        std::fs::write(&path, sample_csv(3)).unwrap();

        let accounts = load_accounts_from_file(&path).unwrap();
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[2].name, "User 3");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_accounts_from_file("/no/such/file.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/file.csv"));
    }

    #[test]
    fn test_search_then_paginate() {
        let accounts = load_accounts_from_str(&sample_csv(45));
        let mut view = AccountView::new(Arc::new(accounts));

        // "female" also matches nothing else; odd ids only.
        view.apply_search("FEMALE");
        assert_eq!(view.row_count(), 23);

        let page = paginate(&view, 2, 20);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 3);
        // Order within the filtered subsequence is the source order.
        assert_eq!(page.items[0].id, 41);
        assert_eq!(page.items[1].id, 43);
        assert_eq!(page.items[2].id, 45);
    }

    #[test]
    fn test_filtered_view_is_a_subsequence() {
        let accounts = load_accounts_from_str(&sample_csv(45));
        let mut view = AccountView::new(Arc::new(accounts));
        view.apply_search("City 3");

        let ids: Vec<i64> = view.accounts().map(|a| a.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(!ids.is_empty());
    }

    #[test]
    fn test_clamp_law_for_any_requested_page() {
        let accounts = load_accounts_from_str(&sample_csv(45));
        let view = AccountView::new(Arc::new(accounts));

        for requested in [i64::MIN, -1, 0, 1, 2, 3, 4, 99, i64::MAX] {
            let page = paginate(&view, requested, 20);
            assert!(page.current_page >= 1);
            assert!(page.current_page <= page.total_pages);
        }
    }

    #[test]
    fn test_repeated_queries_recompute_the_same_view() {
        let accounts = load_accounts_from_str(&sample_csv(45));
        let mut view = AccountView::new(Arc::new(accounts));

        view.apply_search("user1");
        let first = paginate(&view, 1, 20);
        view.apply_search("something else");
        view.apply_search("user1");
        let second = paginate(&view, 1, 20);

        assert_eq!(first, second);
    }
}
