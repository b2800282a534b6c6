/*
 * Unit tests for building construction and the observation types
 *
 * The unit tests follow the Arrange, Act, Assert pattern.
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::config::{BuildingConfig, Config, ConfigError, PassengerSeed, SimulationConfig};
    use crate::shared::{Building, Car, SimSnapshot};

    /***************************************/
    /*           Test functions            */
    /***************************************/
    fn test_config(n_floors: u8, home_floor: u8, seeds: &[(u8, u8)]) -> Config {
        Config {
            building: BuildingConfig {
                n_floors,
                home_floor,
            },
            simulation: SimulationConfig {
                step_interval_ms: 1,
            },
            passengers: seeds
                .iter()
                .map(|&(origin, destination)| PassengerSeed {
                    origin,
                    destination,
                })
                .collect(),
        }
    }

    /***************************************/
    /*             Test cases              */
    /***************************************/
    #[test]
    fn test_building_seeds_floors_in_order() {
        // Purpose: verify that passengers land on their origin floor and
        // get sequential identities in seed order.

        // Arrange
        let config = test_config(10, 1, &[(1, 2), (2, 5), (10, 1)]);

        // Act
        let building = Building::from_config(&config).unwrap();

        // Assert
        assert_eq!(building.n_floors(), 10);
        assert_eq!(building.home_floor, 1);
        assert_eq!(building.floor(1).waiting.len(), 1);
        assert_eq!(building.floor(1).waiting[0].id, 1);
        assert_eq!(building.floor(1).waiting[0].destination, 2);
        assert_eq!(building.floor(2).waiting[0].id, 2);
        assert_eq!(building.floor(2).waiting[0].destination, 5);
        assert_eq!(building.floor(10).waiting[0].id, 3);
        assert_eq!(building.floor(10).waiting[0].destination, 1);
        for number in [3, 4, 5, 6, 7, 8, 9] {
            assert!(building.floor(number).waiting.is_empty());
        }
    }

    #[test]
    fn test_building_rejects_destination_above_top_floor() {
        // Purpose: verify that a seed pointing outside the building is
        // rejected with the offending floor number.

        // Arrange
        let config = test_config(10, 1, &[(1, 11)]);

        // Act
        let result = Building::from_config(&config);

        // Assert
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFloor {
                floor: 11,
                n_floors: 10
            })
        ));
    }

    #[test]
    fn test_building_rejects_origin_zero() {
        // Purpose: verify that floor numbering starts at one.

        // Arrange
        let config = test_config(10, 1, &[(0, 3)]);

        // Act
        let result = Building::from_config(&config);

        // Assert
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFloor { floor: 0, .. })
        ));
    }

    #[test]
    fn test_building_rejects_home_floor_outside_building() {
        // Purpose: verify that the home floor is validated like any other
        // floor number.

        // Arrange
        let config = test_config(4, 5, &[]);

        // Act
        let result = Building::from_config(&config);

        // Assert
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFloor {
                floor: 5,
                n_floors: 4
            })
        ));
    }

    #[test]
    fn test_building_rejects_zero_floors() {
        // Purpose: verify that an empty building is not constructible.

        // Arrange
        let config = test_config(0, 1, &[]);

        // Act
        let result = Building::from_config(&config);

        // Assert
        assert!(matches!(result, Err(ConfigError::NoFloors)));
    }

    #[test]
    fn test_building_accepts_same_floor_trip() {
        // Purpose: verify that a trip whose destination equals its origin
        // passes validation.

        // Arrange
        let config = test_config(10, 1, &[(3, 3)]);

        // Act
        let building = Building::from_config(&config).unwrap();

        // Assert
        assert_eq!(building.floor(3).waiting[0].origin, 3);
        assert_eq!(building.floor(3).waiting[0].destination, 3);
    }

    #[test]
    fn test_snapshot_captures_positions_and_destinations() {
        // Purpose: verify that a snapshot reflects the car and every
        // floor's waiting list.

        // Arrange
        let config = test_config(3, 1, &[(2, 3)]);
        let building = Building::from_config(&config).unwrap();
        let car = Car::new(building.home_floor);

        // Act
        let snapshot = SimSnapshot::capture(&car, &building);

        // Assert
        assert_eq!(snapshot.current_floor, 1);
        assert!(!snapshot.moving);
        assert!(snapshot.onboard.is_empty());
        assert_eq!(snapshot.floors.len(), 3);
        assert_eq!(snapshot.floors[1].number, 2);
        assert_eq!(snapshot.floors[1].waiting[0].destination, 3);
    }
}
