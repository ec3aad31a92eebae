// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Methods for creating the network buses and heat pipes of an
//! [`EnergySystem`] from the point and line layers.

use crate::economics::GlobalParameters;
use crate::tables::{BusRow, HeatPipeRow};
use crate::{EnergySystem, Error, Group, Label, Line, LineType, Point, PointType};

use super::{PipeEdge, Scope};

/// One direction of a line, from the `start` point to the `end` point.
struct Direction<'a> {
    start: (Group, &'a str),
    end: (Group, &'a str),
}

/// Network topology.
impl EnergySystem {
    /// Creates a bus of the network medium for every point.
    ///
    /// This must be called with all points before [`add_lines`] is called, as
    /// the heat pipes can only be attached to existing buses.
    ///
    /// [`add_lines`]: EnergySystem::add_lines
    pub fn add_points<P: Point>(&mut self, points: &[P]) -> Result<(), Error> {
        let row = BusRow {
            active: true,
            label_2: self.config.network_medium.clone(),
            ..Default::default()
        };

        for point in points {
            let group = match point.point_type() {
                PointType::House => Group::House,
                PointType::Generation => Group::Generation,
                PointType::Junction => Group::Infrastructure,
            };
            self.add_buses(&Scope::new(group, point.id()), std::slice::from_ref(&row))?;
        }

        tracing::info!("Network buses appended for {} points.", points.len());
        Ok(())
    }

    /// Creates the heat pipes for every line, one per active pipe option and
    /// direction.
    ///
    /// Laterals get a single direction, from the house or generation site
    /// into the network.  The flow direction of distribution lines is
    /// unknown, so they get pipes in both directions.
    ///
    /// Returns an error if a line refers to a point that has no bus.
    pub fn add_lines<L: Line>(
        &mut self,
        lines: &[L],
        options: &[HeatPipeRow],
        params: &GlobalParameters,
    ) -> Result<(), Error> {
        for line in lines {
            if line.id_start() == line.id_end() {
                return Err(Error::invalid_line(format!(
                    "Line:({}, {}) Can't connect a point to itself.",
                    line.id_start(),
                    line.id_end()
                )));
            }
            if line.length().is_nan() || line.length() <= 0.0 {
                return Err(Error::invalid_parameter(format!(
                    "Line:({}, {}) must have a positive length. Found {}.",
                    line.id_start(),
                    line.id_end(),
                    line.length()
                )));
            }

            for direction in self.directions(line)? {
                self.add_pipes(&direction, line.length(), options, params)?;
            }
        }

        tracing::info!("Heat pipes appended for {} lines.", lines.len());
        Ok(())
    }

    /// Returns the directions in which pipes are built along the given line.
    fn directions<'a, L: Line>(&self, line: &'a L) -> Result<Vec<Direction<'a>>, Error> {
        let (id_start, id_end) = (line.id_start(), line.id_end());

        let direction = match line.line_type() {
            LineType::HouseLateral => {
                self.lateral(line, Group::House, &self.config.house_prefix)?
            }
            LineType::GenerationLateral => {
                self.lateral(line, Group::Generation, &self.config.generation_prefix)?
            }
            LineType::Distribution => {
                return Ok(vec![
                    Direction {
                        start: (Group::Infrastructure, id_start),
                        end: (Group::Infrastructure, id_end),
                    },
                    Direction {
                        start: (Group::Infrastructure, id_end),
                        end: (Group::Infrastructure, id_start),
                    },
                ]);
            }
        };

        Ok(vec![direction])
    }

    /// Returns the direction of a lateral line, from its endpoint in `group`
    /// into the network.
    ///
    /// The endpoint in `group` is recognised by the id `prefix`.
    fn lateral<'a, L: Line>(
        &self,
        line: &'a L,
        group: Group,
        prefix: &str,
    ) -> Result<Direction<'a>, Error> {
        let (id_start, id_end) = (line.id_start(), line.id_end());

        let (outer, inner) = match (id_start.starts_with(prefix), id_end.starts_with(prefix)) {
            (true, false) => (id_start, id_end),
            (false, true) => (id_end, id_start),
            _ => {
                return Err(Error::invalid_line(format!(
                    "Line:({id_start}, {id_end}) {} must have exactly one endpoint with prefix {prefix}.",
                    line.line_type()
                )));
            }
        };

        Ok(Direction {
            start: (group, outer),
            end: (Group::Infrastructure, inner),
        })
    }

    fn add_pipes(
        &mut self,
        direction: &Direction<'_>,
        length: f64,
        options: &[HeatPipeRow],
        params: &GlobalParameters,
    ) -> Result<(), Error> {
        let medium = self.config.network_medium.clone();
        let (start_group, start) = direction.start;
        let (end_group, end) = direction.end;

        let edge = PipeEdge {
            input: self.bus(&Label::bus(start_group, &medium, start))?,
            output: self.bus(&Label::bus(end_group, &medium, end))?,
            length,
        };
        let scope = Scope::new(Group::Infrastructure, format!("{start}-{end}")).with_medium(medium);

        self.add_heat_pipes(&scope, options, params, &edge)
    }
}
