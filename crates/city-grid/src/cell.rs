//! Cell type codes.

use std::fmt;

/// What occupies a grid cell.
///
/// The discriminants are stable small integers so renderers and external
/// tools can exchange raw cell arrays.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty               = 0,
    RoadMajor           = 1,
    RoadMinor           = 2,
    Lot                 = 3,
    Building            = 4,
    Park                = 5,
    School              = 6,
    Hospital            = 7,
    FireStation         = 8,
    /// Legacy code; no longer produced.
    BuildingResidential = 9,
    /// Legacy code; no longer produced.
    BuildingCommercial  = 10,
}

impl CellType {
    pub const ALL: [CellType; 11] = [
        CellType::Empty,
        CellType::RoadMajor,
        CellType::RoadMinor,
        CellType::Lot,
        CellType::Building,
        CellType::Park,
        CellType::School,
        CellType::Hospital,
        CellType::FireStation,
        CellType::BuildingResidential,
        CellType::BuildingCommercial,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<CellType> {
        CellType::ALL.get(code as usize).copied()
    }

    /// Major or minor road.
    #[inline]
    pub fn is_road(self) -> bool {
        matches!(self, CellType::RoadMajor | CellType::RoadMinor)
    }

    /// Cell types that may carry a structure record.
    #[inline]
    pub fn is_structure(self) -> bool {
        matches!(
            self,
            CellType::Building
                | CellType::Park
                | CellType::School
                | CellType::Hospital
                | CellType::FireStation
                | CellType::BuildingResidential
                | CellType::BuildingCommercial
        )
    }

    /// Block detection treats these as region boundaries.
    #[inline]
    pub fn is_block_boundary(self) -> bool {
        matches!(
            self,
            CellType::RoadMajor | CellType::RoadMinor | CellType::Park | CellType::School
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Empty               => "empty",
            CellType::RoadMajor           => "road_major",
            CellType::RoadMinor           => "road_minor",
            CellType::Lot                 => "lot",
            CellType::Building            => "building",
            CellType::Park                => "park",
            CellType::School              => "school",
            CellType::Hospital            => "hospital",
            CellType::FireStation         => "fire_station",
            CellType::BuildingResidential => "building_residential",
            CellType::BuildingCommercial  => "building_commercial",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
