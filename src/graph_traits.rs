// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the traits that need to be implemented by the types
//! that represent the rows of the point and line layers.

use std::fmt::Display;

use serde::Deserialize;

/// The type of a point in the point layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum PointType {
    /// A house.
    #[serde(rename = "H")]
    House,
    /// An energy generation site.
    #[serde(rename = "G")]
    Generation,
    /// A junction of the distribution network.
    #[serde(rename = "K")]
    Junction,
}

impl Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointType::House => write!(f, "H"),
            PointType::Generation => write!(f, "G"),
            PointType::Junction => write!(f, "K"),
        }
    }
}

/// The type of a line in the line layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum LineType {
    /// A lateral connecting a house to the network.
    #[serde(rename = "HL")]
    HouseLateral,
    /// A lateral connecting a generation site to the network.
    #[serde(rename = "GL")]
    GenerationLateral,
    /// A distribution line between two junctions.
    #[serde(rename = "DL")]
    Distribution,
}

impl Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineType::HouseLateral => write!(f, "HL"),
            LineType::GenerationLateral => write!(f, "GL"),
            LineType::Distribution => write!(f, "DL"),
        }
    }
}

/**
This trait needs to be implemented by the type that represents a row of the
point layer.

Geometry columns are irrelevant for the topology and are not accessed.

<details>
<summary>Example implementation for a shapefile row:</summary>

```ignore
impl dhs_network_graph::Point for PointRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn point_type(&self) -> dhs_network_graph::PointType {
        match self.kind.as_str() {
            "H" => dhs_network_graph::PointType::House,
            "G" => dhs_network_graph::PointType::Generation,
            _ => dhs_network_graph::PointType::Junction,
        }
    }
}
```

</details>
*/
pub trait Point {
    /// Returns the id of the point.
    fn id(&self) -> &str;
    /// Returns the type of the point.
    fn point_type(&self) -> PointType;
}

/**
This trait needs to be implemented by the type that represents a row of the
line layer.

<details>
<summary>Example implementation for a shapefile row:</summary>

```ignore
impl dhs_network_graph::Line for LineRecord {
    fn id_start(&self) -> &str {
        &self.id_start
    }

    fn id_end(&self) -> &str {
        &self.id_end
    }

    fn line_type(&self) -> dhs_network_graph::LineType {
        self.kind
    }

    fn length(&self) -> f64 {
        self.length
    }
}
```

</details>
*/
pub trait Line {
    /// Returns the id of the point where the line starts.
    fn id_start(&self) -> &str;
    /// Returns the id of the point where the line ends.
    fn id_end(&self) -> &str;
    /// Returns the type of the line.
    fn line_type(&self) -> LineType;
    /// Returns the length of the line, as computed by the geometry reader.
    fn length(&self) -> f64;
}
