mod common;

use common::{flight, flight_numbers, load_fixture, load_network, two_way};
use skyroute_lib::{
    find_optimal_route, parse_flight_data, plan_route, CustomWeights, Error, Flight,
    OptimizationPriority, RoutePriority, RouteRequest,
};

#[test]
fn direct_flight_beats_cheaper_looking_connection() {
    let parsed = load_fixture("delhi_chennai.txt");
    let result = find_optimal_route(
        &parsed.city_names(),
        &parsed.flights,
        "Delhi",
        "Chennai",
        RoutePriority::Cost,
    )
    .expect("route exists");

    assert_eq!(flight_numbers(&result.path), vec!["UK404"]);
    assert_eq!(result.total_cost, 6000);
    assert_eq!(result.total_duration, 180);
}

#[test]
fn edgeless_graph_has_no_route() {
    let cities = ["A", "B", "C"];
    assert!(find_optimal_route(&cities, &[], "A", "C", RoutePriority::Cost).is_none());
}

#[test]
fn unknown_endpoints_return_none() {
    let flights = vec![flight("X1", "A", "B", 1, 1)];
    assert!(find_optimal_route(&["A", "B"], &flights, "A", "Z", RoutePriority::Cost).is_none());
    assert!(find_optimal_route(&["A", "B"], &flights, "Z", "B", RoutePriority::Time).is_none());
}

#[test]
fn self_loop_never_produces_a_route() {
    let flights = vec![flight("LOOP", "A", "A", 1, 1)];
    assert!(find_optimal_route(&["A", "B"], &flights, "A", "B", RoutePriority::Cost).is_none());

    let same = find_optimal_route(&["A", "B"], &flights, "A", "A", RoutePriority::Cost)
        .expect("source is the destination");
    assert!(same.path.is_empty());
}

#[test]
fn two_way_flight_is_symmetric() {
    let mut leg = two_way("AI101", "Delhi", "Mumbai", 5000, 120);
    leg.dep_time = "08:00".to_string();
    leg.arr_time = "10:00".to_string();
    let flights = vec![leg];
    let cities = ["Delhi", "Mumbai"];

    let forward = find_optimal_route(&cities, &flights, "Delhi", "Mumbai", RoutePriority::Cost)
        .expect("forward route");
    let backward = find_optimal_route(&cities, &flights, "Mumbai", "Delhi", RoutePriority::Cost)
        .expect("return route");

    assert_eq!(forward.total_cost, 5000);
    assert_eq!(backward.total_cost, 5000);
    assert_eq!(forward.path.len(), 1);
    assert_eq!(backward.path.len(), 1);
    assert_eq!(backward.path[0].dep_time, forward.path[0].arr_time);
    assert_eq!(backward.path[0].arr_time, forward.path[0].dep_time);
    assert_eq!(backward.path[0].src, "Mumbai");
}

#[test]
fn priority_changes_the_chosen_route() {
    let network = load_network("india_network.txt");

    let cheapest = network
        .find_route("Delhi", "Kolkata", RoutePriority::Cost)
        .expect("cost route");
    assert_eq!(flight_numbers(&cheapest.path), vec!["UK404", "SG505"]);
    assert_eq!(cheapest.total_cost, 10500);
    assert_eq!(cheapest.total_duration, 320);

    let fastest = network
        .find_route("Delhi", "Kolkata", RoutePriority::Time)
        .expect("time route");
    assert_eq!(flight_numbers(&fastest.path), vec!["AI101", "6E707"]);
    assert_eq!(fastest.total_cost, 12000);
    assert_eq!(fastest.total_duration, 280);
}

#[test]
fn distance_falls_back_to_duration() {
    let network = load_network("india_network.txt");
    let shortest = network
        .find_route("Delhi", "Kolkata", RoutePriority::Distance)
        .expect("distance route");
    assert_eq!(flight_numbers(&shortest.path), vec!["AI101", "6E707"]);
    assert_eq!(shortest.total_distance_km(), 2800.0);
}

#[test]
fn explicit_distance_overrides_the_fallback() {
    let mut short_hop = flight("S1", "A", "C", 100, 300);
    short_hop.distance = Some(50.0);
    let flights = vec![short_hop, flight("L1", "A", "B", 1, 10), flight("L2", "B", "C", 1, 10)];

    let result = find_optimal_route(&["A", "B", "C"], &flights, "A", "C", RoutePriority::Distance)
        .expect("route exists");
    assert_eq!(flight_numbers(&result.path), vec!["S1"]);
}

#[test]
fn custom_weights_follow_the_dominant_metric() {
    let network = load_network("india_network.txt");

    let cost_heavy = RoutePriority::Custom(CustomWeights::new(90.0, 5.0, 5.0));
    let result = network
        .find_route("Delhi", "Kolkata", cost_heavy)
        .expect("route");
    assert_eq!(flight_numbers(&result.path), vec!["UK404", "SG505"]);

    let time_heavy = RoutePriority::Custom(CustomWeights::new(0.0, 95.0, 5.0));
    let result = network
        .find_route("Delhi", "Kolkata", time_heavy)
        .expect("route");
    assert_eq!(flight_numbers(&result.path), vec!["AI101", "6E707"]);
    // True totals are reported whatever the blend.
    assert_eq!(result.total_cost, 12000);
    assert_eq!(result.total_duration, 280);
}

#[test]
fn one_way_flights_are_not_reversed() {
    let network = load_network("india_network.txt");
    assert!(network
        .find_route("Kolkata", "Delhi", RoutePriority::Cost)
        .is_none());
    let back = network
        .find_route("Mumbai", "Delhi", RoutePriority::Cost)
        .expect("return leg of AI101");
    assert_eq!(back.path[0].src, "Mumbai");
}

#[test]
fn plan_route_suggests_close_city_names() {
    let network = load_network("india_network.txt");
    let err = plan_route(&network, &RouteRequest::new("Dehli", "Kolkata"))
        .expect_err("typo in source");

    let message = format!("{err}");
    assert!(message.contains("unknown city name: Dehli"), "{message}");
    assert!(message.contains("Did you mean"), "{message}");
    assert!(message.contains("Delhi"), "{message}");
}

#[test]
fn plan_route_reports_missing_routes() {
    let network = load_network("india_network.txt");
    let err = plan_route(&network, &RouteRequest::new("Kolkata", "Delhi"))
        .expect_err("no connection");
    assert!(matches!(
        err,
        Error::RouteNotFound { ref start, ref goal } if start == "Kolkata" && goal == "Delhi"
    ));
}

#[test]
fn plan_route_honours_request_priority() {
    let network = load_network("india_network.txt");
    let request =
        RouteRequest::new("Delhi", "Kolkata").with_priority(OptimizationPriority::Time);
    let result = plan_route(&network, &request).expect("route exists");
    assert_eq!(result.total_duration, 280);
}

/// Deterministic pseudo-random flight sets for the brute-force comparison.
fn generated_flights(seed: u64, cities: &[&str], count: usize) -> Vec<Flight> {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    (0..count)
        .map(|idx| {
            let src = cities[next(cities.len() as u64) as usize];
            let dest = cities[next(cities.len() as u64) as usize];
            let cost = 1 + next(500);
            let duration = 10 + next(300);
            let mut f = flight(&format!("G{idx}"), src, dest, cost, duration);
            f.is_two_way = next(4) == 0;
            f
        })
        .collect()
}

/// Cheapest total cost over every simple path, by exhaustive search.
fn brute_force_cost(cities: &[&str], flights: &[Flight], source: &str, goal: &str) -> Option<u64> {
    let mut edges: Vec<Flight> = flights.to_vec();
    edges.extend(flights.iter().filter(|f| f.is_two_way).map(Flight::reversed));

    fn walk(
        edges: &[Flight],
        at: &str,
        goal: &str,
        visited: &mut Vec<String>,
        spent: u64,
        best: &mut Option<u64>,
    ) {
        if at == goal {
            *best = Some(best.map_or(spent, |b| b.min(spent)));
            return;
        }
        for edge in edges.iter().filter(|e| e.src == at) {
            if visited.iter().any(|v| v == &edge.dest) {
                continue;
            }
            visited.push(edge.dest.clone());
            walk(edges, &edge.dest, goal, visited, spent + edge.cost, best);
            visited.pop();
        }
    }

    if !cities.contains(&source) || !cities.contains(&goal) {
        return None;
    }
    let mut best = None;
    let mut visited = vec![source.to_string()];
    walk(&edges, source, goal, &mut visited, 0, &mut best);
    best
}

#[test]
fn cost_route_matches_brute_force_enumeration() {
    let cities = ["A", "B", "C", "D", "E", "F"];
    for seed in 1..=25u64 {
        let flights = generated_flights(seed, &cities, 12);
        for source in cities {
            for goal in cities {
                let expected = brute_force_cost(&cities, &flights, source, goal);
                let actual =
                    find_optimal_route(&cities, &flights, source, goal, RoutePriority::Cost)
                        .map(|result| result.total_cost);
                assert_eq!(
                    actual, expected,
                    "seed {seed}: {source} -> {goal} disagrees with exhaustive search"
                );
            }
        }
    }
}

#[test]
fn totals_saturate_on_extreme_costs() {
    let parsed = parse_flight_data(
        "3\nA\nB\nC\n2\nX X1 A B 18446744073709551615 1 01:00 02:00 N\nX X2 B C 1 1 03:00 04:00 N\n",
    );
    assert_eq!(parsed.flights.len(), 2);

    let result = find_optimal_route(
        &parsed.city_names(),
        &parsed.flights,
        "A",
        "C",
        RoutePriority::Time,
    )
    .expect("route exists");
    assert_eq!(flight_numbers(&result.path), vec!["X1", "X2"]);
    assert_eq!(result.total_cost, u64::MAX);
    assert_eq!(result.total_duration, 2);
}
