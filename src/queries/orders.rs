use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::domain::{Customer, Order, Product};

/// Orders carrying at least one product of `category`.
pub fn orders_containing_category(orders: &[Order], category: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| {
            order
                .products
                .iter()
                .any(|product| product.category == category)
        })
        .cloned()
        .collect()
}

/// Distinct products ordered by customers of `tier` between `from` and `to`,
/// both ends inclusive. First-encounter order, de-duplicated by product id.
pub fn products_ordered_by_tier_between(
    orders: &[Order],
    tier: u8,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for order in orders {
        if order.customer.tier != tier || order.order_date < from || order.order_date > to {
            continue;
        }
        for product in &order.products {
            if seen.insert(product.id.clone()) {
                result.push(product.clone());
            }
        }
    }
    result
}

/// The `n` earliest orders, date ascending; equal dates keep input order.
pub fn earliest_orders(orders: &[Order], n: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by_key(|order| order.order_date);
    sorted.truncate(n);
    sorted
}

/// Orders placed exactly on `date`.
pub fn orders_placed_on(orders: &[Order], date: NaiveDate) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.order_date == date)
        .cloned()
        .collect()
}

/// Distinct products on orders placed in `[from, until)`, de-duplicated by
/// product id in first-encounter order.
pub fn distinct_products_ordered_between(
    orders: &[Order],
    from: NaiveDate,
    until: NaiveDate,
) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for order in orders {
        if order.order_date < from || order.order_date >= until {
            continue;
        }
        for product in &order.products {
            if seen.insert(product.id.clone()) {
                result.push(product.clone());
            }
        }
    }
    result
}

/// Mean total of the orders placed on `date`, or `None` when there are none.
pub fn average_order_total_on(orders: &[Order], date: NaiveDate) -> Option<f64> {
    let totals: Vec<f64> = orders
        .iter()
        .filter(|order| order.order_date == date)
        .map(Order::total)
        .collect();
    if totals.is_empty() {
        return None;
    }
    Some(totals.iter().sum::<f64>() / totals.len() as f64)
}

/// Order id mapped to the number of product lines on the order.
pub fn product_counts_by_order(orders: &[Order]) -> HashMap<String, usize> {
    orders
        .iter()
        .map(|order| (order.id.clone(), order.products.len()))
        .collect()
}

/// Orders grouped by customer value; within a group, input order is kept.
pub fn orders_by_customer(orders: &[Order]) -> HashMap<Customer, Vec<Order>> {
    let mut groups: HashMap<Customer, Vec<Order>> = HashMap::new();
    for order in orders {
        groups
            .entry(order.customer.clone())
            .or_default()
            .push(order.clone());
    }
    groups
}

/// Each order mapped to the sum of its product prices.
pub fn order_totals(orders: &[Order]) -> HashMap<Order, f64> {
    orders
        .iter()
        .map(|order| (order.clone(), order.total()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(id: &str, category: &str, price: f64) -> Product {
        Product::new(id, id, category, price)
    }

    fn order(id: &str, on: NaiveDate, customer: &Customer, products: Vec<Product>) -> Order {
        Order::new(id, on, customer.clone(), products)
    }

    fn tier2() -> Customer {
        Customer::new("c2", "Bruno", 2)
    }

    fn tier3() -> Customer {
        Customer::new("c3", "Dana", 3)
    }

    #[test]
    fn test_orders_containing_category() {
        let orders = vec![
            order(
                "o1",
                date(2021, 2, 3),
                &tier2(),
                vec![product("p1", "Books", 20.0), product("p2", "Baby", 40.0)],
            ),
            order(
                "o2",
                date(2021, 2, 4),
                &tier3(),
                vec![product("p3", "Toys", 15.0)],
            ),
            order("o3", date(2021, 2, 5), &tier2(), vec![]),
        ];

        let with_baby = orders_containing_category(&orders, "Baby");
        assert_eq!(with_baby.len(), 1);
        assert_eq!(with_baby[0].id, "o1");

        assert!(orders_containing_category(&[], "Baby").is_empty());
    }

    #[test]
    fn test_tier_window_is_inclusive_and_deduplicates() {
        let shared = product("p1", "Books", 20.0);
        let orders = vec![
            // On the lower bound
            order(
                "o1",
                date(2021, 2, 1),
                &tier2(),
                vec![shared.clone(), product("p2", "Toys", 10.0)],
            ),
            // On the upper bound, repeats p1
            order(
                "o2",
                date(2021, 4, 1),
                &tier2(),
                vec![shared.clone(), product("p3", "Baby", 30.0)],
            ),
            // Right tier, outside the window
            order("o3", date(2021, 4, 2), &tier2(), vec![product("p4", "Books", 5.0)]),
            // Inside the window, wrong tier
            order("o4", date(2021, 3, 1), &tier3(), vec![product("p5", "Books", 5.0)]),
        ];

        let result =
            products_ordered_by_tier_between(&orders, 2, date(2021, 2, 1), date(2021, 4, 1));
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_earliest_orders_sorts_and_truncates() {
        let orders = vec![
            order("o1", date(2021, 3, 15), &tier2(), vec![]),
            order("o2", date(2021, 1, 12), &tier3(), vec![]),
            order("o3", date(2021, 2, 28), &tier2(), vec![]),
            order("o4", date(2021, 4, 20), &tier3(), vec![]),
        ];

        let earliest = earliest_orders(&orders, 3);
        let ids: Vec<&str> = earliest.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o3", "o1"]);
    }

    #[test]
    fn test_earliest_orders_returns_all_when_fewer_than_n() {
        let orders = vec![
            order("o1", date(2021, 3, 15), &tier2(), vec![]),
            order("o2", date(2021, 1, 12), &tier3(), vec![]),
        ];

        let earliest = earliest_orders(&orders, 3);
        let ids: Vec<&str> = earliest.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o1"]);
    }

    #[test]
    fn test_earliest_orders_is_stable_on_equal_dates() {
        let orders = vec![
            order("o1", date(2021, 3, 15), &tier2(), vec![]),
            order("o2", date(2021, 3, 15), &tier3(), vec![]),
            order("o3", date(2021, 3, 15), &tier2(), vec![]),
        ];

        let earliest = earliest_orders(&orders, 2);
        let ids: Vec<&str> = earliest.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o2"]);
    }

    #[test]
    fn test_orders_placed_on_exact_date() {
        let orders = vec![
            order("o1", date(2021, 3, 15), &tier2(), vec![]),
            order("o2", date(2021, 3, 16), &tier3(), vec![]),
            order("o3", date(2021, 3, 15), &tier3(), vec![]),
        ];

        let on_the_day = orders_placed_on(&orders, date(2021, 3, 15));
        let ids: Vec<&str> = on_the_day.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o3"]);
    }

    #[test]
    fn test_period_products_use_half_open_range() {
        let shared = product("p1", "Books", 20.0);
        let orders = vec![
            order("o1", date(2021, 2, 1), &tier2(), vec![shared.clone()]),
            order(
                "o2",
                date(2021, 2, 14),
                &tier3(),
                // Duplicate line within one order collapses too
                vec![shared.clone(), product("p2", "Toys", 8.0), shared.clone()],
            ),
            // First day outside the half-open range
            order("o3", date(2021, 3, 1), &tier2(), vec![product("p3", "Baby", 30.0)]),
        ];

        let result =
            distinct_products_ordered_between(&orders, date(2021, 2, 1), date(2021, 3, 1));
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_average_order_total_example() {
        let orders = vec![
            order(
                "o1",
                date(2021, 3, 15),
                &tier2(),
                vec![product("p1", "Books", 10.0), product("p2", "Toys", 20.0)],
            ),
            order("o2", date(2021, 3, 15), &tier3(), vec![product("p3", "Baby", 40.0)]),
            order("o3", date(2021, 3, 16), &tier3(), vec![product("p4", "Baby", 999.0)]),
        ];

        // (30 + 40) / 2
        let average = average_order_total_on(&orders, date(2021, 3, 15)).unwrap();
        assert!((average - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_order_total_absent_without_matches() {
        let orders = vec![order("o1", date(2021, 3, 16), &tier2(), vec![])];
        assert!(average_order_total_on(&orders, date(2021, 3, 15)).is_none());
        assert!(average_order_total_on(&[], date(2021, 3, 15)).is_none());
    }

    #[test]
    fn test_product_counts_count_duplicate_lines() {
        let repeated = product("p1", "Books", 10.0);
        let orders = vec![
            order(
                "o1",
                date(2021, 2, 3),
                &tier2(),
                vec![repeated.clone(), repeated.clone()],
            ),
            order("o2", date(2021, 2, 4), &tier3(), vec![]),
        ];

        let counts = product_counts_by_order(&orders);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["o1"], 2);
        assert_eq!(counts["o2"], 0);
    }

    #[test]
    fn test_orders_grouped_by_customer_value() {
        let bruno = tier2();
        let dana = tier3();
        let orders = vec![
            order("o1", date(2021, 2, 3), &bruno, vec![]),
            order("o2", date(2021, 2, 4), &dana, vec![]),
            order("o3", date(2021, 2, 5), &bruno, vec![]),
        ];

        let groups = orders_by_customer(&orders);
        assert_eq!(groups.len(), 2);

        let bruno_ids: Vec<&str> = groups[&bruno].iter().map(|o| o.id.as_str()).collect();
        assert_eq!(bruno_ids, vec!["o1", "o3"]);
        assert_eq!(groups[&dana].len(), 1);
    }

    #[test]
    fn test_order_totals_keyed_by_full_order() {
        let o1 = order(
            "o1",
            date(2021, 3, 15),
            &tier2(),
            vec![product("p1", "Books", 10.0), product("p1", "Books", 10.0)],
        );
        let o2 = order("o2", date(2021, 3, 16), &tier3(), vec![]);
        let totals = order_totals(&[o1.clone(), o2.clone()]);

        assert_eq!(totals.len(), 2);
        // Duplicate lines are counted twice
        assert!((totals[&o1] - 20.0).abs() < 1e-9);
        assert_eq!(totals[&o2], 0.0);
    }

    #[test]
    fn test_maps_on_empty_input() {
        assert!(product_counts_by_order(&[]).is_empty());
        assert!(orders_by_customer(&[]).is_empty());
        assert!(order_totals(&[]).is_empty());
    }
}
