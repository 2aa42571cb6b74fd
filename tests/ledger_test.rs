use dispendio::application::{AppError, LedgerService};
use dispendio::domain::{Amount, Expense};
use rust_decimal_macros::dec;

mod common;
use common::service_with_lines;

#[test]
fn test_ingested_lines_keep_prompt_order() {
    let service = service_with_lines(&["Кофе; 235", "Чай; 80", "Мыло; 50"]);

    assert_eq!(service.count(), 3);
    let names: Vec<&str> = service.entries().iter().map(Expense::name).collect();
    assert_eq!(names, vec!["Кофе", "Чай", "Мыло"]);
}

#[test]
fn test_duplicates_are_allowed() {
    let service = service_with_lines(&["Кофе; 235", "Кофе; 235"]);
    assert_eq!(service.count(), 2);
    assert_eq!(service.entries()[0], service.entries()[1]);
}

#[test]
fn test_statistics_over_known_amounts() {
    let service = service_with_lines(&["a; 10", "b; 20", "c; 30"]);
    let stats = service.statistics().unwrap();

    assert_eq!(stats.total, dec!(60));
    assert_eq!(stats.average, dec!(20));
    assert_eq!(stats.max, dec!(30));
    assert_eq!(stats.min, dec!(10));
    assert_eq!(stats.count, 3);
}

#[test]
fn test_sort_preview_does_not_mutate_until_applied() {
    let mut service = service_with_lines(&["c; 30", "a; 10", "b; 20"]);

    let preview = service.sorted_preview().unwrap();
    let previewed: Vec<Amount> = preview.iter().map(Expense::amount).collect();
    assert_eq!(previewed, vec![dec!(10), dec!(20), dec!(30)]);

    // Declining the preview leaves the ledger untouched.
    let current: Vec<Amount> = service.entries().iter().map(Expense::amount).collect();
    assert_eq!(current, vec![dec!(30), dec!(10), dec!(20)]);

    // Committing replaces the order wholesale.
    service.apply_order(preview);
    let committed: Vec<Amount> = service.entries().iter().map(Expense::amount).collect();
    assert_eq!(committed, vec![dec!(10), dec!(20), dec!(30)]);
}

#[test]
fn test_sort_keeps_ties_in_entry_order() {
    let service = service_with_lines(&["первый; 20", "второй; 10", "третий; 20"]);

    let preview = service.sorted_preview().unwrap();
    let names: Vec<&str> = preview.iter().map(Expense::name).collect();
    assert_eq!(names, vec!["второй", "первый", "третий"]);
}

#[test]
fn test_conversion_is_a_pure_projection() {
    let service = service_with_lines(&["Кофе; 90", "Чай; 45"]);

    let conversions = service.converted(dec!(45)).unwrap();
    assert_eq!(conversions[0].converted, dec!(2));
    assert_eq!(conversions[1].converted, dec!(1));

    // Amounts in the ledger are unchanged.
    let amounts: Vec<Amount> = service.entries().iter().map(Expense::amount).collect();
    assert_eq!(amounts, vec![dec!(90), dec!(45)]);
}

#[test]
fn test_conversion_rejects_bad_rates() {
    let service = service_with_lines(&["Кофе; 90", "Чай; 45"]);

    assert!(matches!(service.converted(dec!(0)), Err(AppError::InvalidRate)));
    assert!(matches!(
        service.converted(dec!(-1)),
        Err(AppError::InvalidRate)
    ));
    assert!(matches!(
        LedgerService::parse_rate("не число"),
        Err(AppError::InvalidRate)
    ));
}

#[test]
fn test_search_is_case_insensitive_in_ledger_order() {
    let service = service_with_lines(&["Салфетки; 235", "Мыло; 50", "салфетки влажные; 120"]);

    let matches = service.search("САЛФЕТКИ").unwrap();
    let names: Vec<&str> = matches.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Салфетки", "салфетки влажные"]);
}

#[test]
fn test_blank_search_term_is_rejected_not_empty() {
    let service = service_with_lines(&["Салфетки; 235", "Мыло; 50"]);

    assert!(matches!(service.search(""), Err(AppError::EmptySearchTerm)));
    assert!(matches!(
        service.search(" \t "),
        Err(AppError::EmptySearchTerm)
    ));
    // Zero matches is a result, not an error.
    assert_eq!(service.search("salv").unwrap().len(), 0);
}

#[test]
fn test_queries_never_mutate_the_ledger() {
    let service = service_with_lines(&["c; 30", "a; 10", "b; 20"]);
    let before: Vec<Expense> = service.entries().to_vec();

    let _ = service.statistics().unwrap();
    let _ = service.sorted_preview().unwrap();
    let _ = service.converted(dec!(2)).unwrap();
    let _ = service.search("a").unwrap();

    assert_eq!(service.entries(), &before[..]);
}
