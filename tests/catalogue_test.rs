// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io


mod utils;

use munin::catalogue::{Error, RouteKind};
use munin::geometry::{distance_coord_to_coord, Coord};
use rstest::rstest;
use utils::{assert_close, CatalogueBuilder};

#[test]
fn circular_route_stats() {
    let _log_guard = munin::logger::init_test_logger();

    let catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .stop("B", 55.6, 37.7)
        .road("A", "B", 2000)
        .bus("99", &["A", "B", "A"], RouteKind::Circular)
        .build();

    let stats = catalogue.route_stats("99").expect("stats for bus 99");
    assert_eq!(stats.stop_count, 3);
    assert_eq!(stats.unique_stop_count, 2);
    assert_eq!(stats.route_length, 4000);

    let geo = distance_coord_to_coord(
        &Coord {
            lat: 55.6,
            lng: 37.6,
        },
        &Coord {
            lat: 55.6,
            lng: 37.7,
        },
    );
    assert_close(stats.curvature, 4000.0 / (2.0 * geo));
}

#[test]
fn linear_route_stats_sum_both_directions() {
    let catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .stop("B", 55.61, 37.61)
        .stop("C", 55.62, 37.62)
        .road("A", "B", 1000)
        .road("B", "C", 1500)
        .road("C", "B", 1600)
        .road("B", "A", 900)
        .bus("7", &["A", "B", "C"], RouteKind::Linear)
        .build();

    let stats = catalogue.route_stats("7").expect("stats for bus 7");
    assert_eq!(stats.route_length, 1000 + 1500 + 1600 + 900);
    assert_eq!(stats.stop_count, 5);
    assert_eq!(stats.unique_stop_count, 3);
}

#[rstest]
#[case("A", "B", Some(1000))] // explicitly set
#[case("B", "A", Some(1000))] // reverse fallback
#[case("B", "C", Some(1500))] // both directions set: the exact one wins
#[case("C", "B", Some(1600))]
#[case("A", "C", None)] // no roadway at all
fn road_distance_directional_fallback(
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: Option<u32>,
) {
    let catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .stop("B", 55.6, 37.7)
        .stop("C", 55.6, 37.8)
        .road("A", "B", 1000)
        .road("B", "C", 1500)
        .road("C", "B", 1600)
        .build();

    let from_idx = catalogue.stop_idx(from).unwrap();
    let to_idx = catalogue.stop_idx(to).unwrap();
    assert_eq!(catalogue.road_distance(from_idx, to_idx), expected);
}

#[test]
fn duplicate_names_are_rejected() {
    let mut catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .stop("B", 55.6, 37.7)
        .bus("14", &["A", "B", "A"], RouteKind::Circular)
        .build();

    let duplicate_stop = catalogue.add_stop(
        "A",
        Coord {
            lat: 0.0,
            lng: 0.0,
        },
    );
    assert_eq!(duplicate_stop, Err(Error::DuplicateName("A".to_string())));

    let duplicate_bus = catalogue.add_bus("14", &["A", "B"], RouteKind::Linear);
    assert_eq!(duplicate_bus, Err(Error::DuplicateName("14".to_string())));
}

#[test]
fn unknown_stops_are_rejected() {
    let mut catalogue = CatalogueBuilder::new().stop("A", 55.6, 37.6).build();

    let bad_road = catalogue.set_road_distance("A", "Nowhere", 500);
    assert_eq!(bad_road, Err(Error::UnknownStop("Nowhere".to_string())));

    let bad_bus = catalogue.add_bus("1", &["A", "Nowhere"], RouteKind::Linear);
    assert_eq!(bad_bus, Err(Error::UnknownStop("Nowhere".to_string())));
}

#[test]
fn stop_info_is_sorted_and_total() {
    let catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .stop("B", 55.6, 37.7)
        .stop("Lonely", 55.6, 37.8)
        .bus("20", &["A", "B", "A"], RouteKind::Circular)
        .bus("10", &["A", "B"], RouteKind::Linear)
        .build();

    assert_eq!(catalogue.stop_info("A"), vec!["10", "20"]);
    assert_eq!(catalogue.stop_info("B"), vec!["10", "20"]);
    assert!(catalogue.stop_info("Lonely").is_empty());
    assert!(catalogue.stop_info("Nowhere").is_empty());
}

#[test]
fn degenerate_routes_have_no_stats() {
    let catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .bus("8", &["A"], RouteKind::Linear)
        .build();

    assert!(catalogue.route_stats("8").is_none());
    assert!(catalogue.route_stats("unknown").is_none());
}

#[test]
fn zero_geometric_length_has_no_stats() {
    // two stops sharing coordinates: curvature would divide by zero
    let catalogue = CatalogueBuilder::new()
        .stop("A", 55.6, 37.6)
        .stop("Twin", 55.6, 37.6)
        .road("A", "Twin", 100)
        .bus("3", &["A", "Twin"], RouteKind::Linear)
        .build();

    assert!(catalogue.route_stats("3").is_none());
}

#[test]
fn iteration_follows_insertion_order() {
    let catalogue = CatalogueBuilder::new()
        .stop("C", 55.6, 37.8)
        .stop("A", 55.6, 37.6)
        .stop("B", 55.6, 37.7)
        .bus("2", &["C", "A"], RouteKind::Linear)
        .bus("1", &["A", "B"], RouteKind::Linear)
        .build();

    let stop_names: Vec<&str> = catalogue.stops().values().map(|stop| stop.id.as_str()).collect();
    assert_eq!(stop_names, vec!["C", "A", "B"]);

    let bus_names: Vec<&str> = catalogue.buses().values().map(|bus| bus.id.as_str()).collect();
    assert_eq!(bus_names, vec!["2", "1"]);
}
