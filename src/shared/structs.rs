/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, ConfigError};

/***************************************/
/*       Public data structures        */
/***************************************/

/// Identity assigned in seed order when the building is constructed.
pub type PassengerId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: u8,
    pub destination: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub number: u8,
    pub waiting: Vec<Passenger>,
}

#[derive(Debug, Clone)]
pub struct Building {
    pub home_floor: u8,
    floors: Vec<Floor>,
}

impl Building {
    /// Builds the seeded building. Every floor number in the configuration
    /// is range checked here, so lookups by floor number are total from
    /// this point on.
    pub fn from_config(config: &Config) -> Result<Building, ConfigError> {
        let n_floors = config.building.n_floors;
        if n_floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        check_floor(config.building.home_floor, n_floors)?;

        let mut floors: Vec<Floor> = (1..=n_floors)
            .map(|number| Floor {
                number,
                waiting: Vec::new(),
            })
            .collect();

        for (index, seed) in config.passengers.iter().enumerate() {
            check_floor(seed.origin, n_floors)?;
            check_floor(seed.destination, n_floors)?;
            floors[(seed.origin - 1) as usize].waiting.push(Passenger {
                id: index as PassengerId + 1,
                origin: seed.origin,
                destination: seed.destination,
            });
        }

        Ok(Building {
            home_floor: config.building.home_floor,
            floors,
        })
    }

    pub fn n_floors(&self) -> u8 {
        self.floors.len() as u8
    }

    /// `number` must be in 1..=n_floors, which holds for every floor
    /// number that survives construction.
    pub fn floor(&self, number: u8) -> &Floor {
        &self.floors[(number - 1) as usize]
    }

    pub fn floor_mut(&mut self, number: u8) -> &mut Floor {
        &mut self.floors[(number - 1) as usize]
    }

    /// All floors, ascending by floor number.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }
}

fn check_floor(floor: u8, n_floors: u8) -> Result<(), ConfigError> {
    if floor < 1 || floor > n_floors {
        return Err(ConfigError::InvalidFloor { floor, n_floors });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Car {
    pub current_floor: u8,
    pub onboard: Vec<Passenger>,
    pub moving: bool,
}

impl Car {
    pub fn new(home_floor: u8) -> Car {
        Car {
            current_floor: home_floor,
            onboard: Vec::new(),
            moving: false,
        }
    }
}

/// Read-only view of the simulation, published after every state change:
/// car position, the moving flag, and the destination of everyone onboard
/// or still waiting.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimSnapshot {
    pub current_floor: u8,
    pub moving: bool,
    pub onboard: Vec<RiderView>,
    pub floors: Vec<FloorView>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RiderView {
    pub id: PassengerId,
    pub destination: u8,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FloorView {
    pub number: u8,
    pub waiting: Vec<RiderView>,
}

impl SimSnapshot {
    pub fn capture(car: &Car, building: &Building) -> SimSnapshot {
        SimSnapshot {
            current_floor: car.current_floor,
            moving: car.moving,
            onboard: car.onboard.iter().map(RiderView::of).collect(),
            floors: building
                .floors()
                .iter()
                .map(|floor| FloorView {
                    number: floor.number,
                    waiting: floor.waiting.iter().map(RiderView::of).collect(),
                })
                .collect(),
        }
    }
}

impl RiderView {
    fn of(passenger: &Passenger) -> RiderView {
        RiderView {
            id: passenger.id,
            destination: passenger.destination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub stops: u32,
    pub delivered: u32,
}
