//! Static knowledge about the SWAT+ dataset layout.
//!
//! Two fixed, process-wide tables defined at startup and never mutated:
//! the bidirectional file-name ↔ database-table mapping, and the column →
//! target-file guesses used when no foreign key is declared for a column.

/// A recognized dataset file and the database table it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    pub file_name: &'static str,
    pub table: &'static str,
}

/// The recognized file/table pairs. Unrecognized file names short-circuit all
/// resolution.
pub const FILE_TYPES: &[FileType] = &[
    FileType { file_name: "hru-data.hru", table: "hru_data_hru" },
    FileType { file_name: "hru-lte.hru", table: "hru_lte_hru" },
    FileType { file_name: "rout_unit.rtu", table: "rout_unit_rtu" },
    FileType { file_name: "hydrology.hyd", table: "hydrology_hyd" },
    FileType { file_name: "topography.hyd", table: "topography_hyd" },
    FileType { file_name: "field.fld", table: "field_fld" },
    FileType { file_name: "soils.sol", table: "soils_sol" },
    FileType { file_name: "landuse.lum", table: "landuse_lum" },
    FileType { file_name: "soil_plant.ini", table: "soil_plant_ini" },
    FileType { file_name: "wetland.wet", table: "wetland_wet" },
    FileType { file_name: "snow.sno", table: "snow_sno" },
    FileType { file_name: "plants.plt", table: "plants_plt" },
    FileType { file_name: "delratio.del", table: "dr_om_del" },
    FileType { file_name: "aquifer.aqu", table: "aquifer_aqu" },
    FileType { file_name: "channel.cha", table: "channel_cha" },
    FileType { file_name: "reservoir.res", table: "reservoir_res" },
    FileType { file_name: "recall.rec", table: "recall_rec" },
    FileType { file_name: "exco.exc", table: "exco_exc" },
    FileType { file_name: "weather-sta.cli", table: "weather_sta_cli" },
];

/// A column known to reference records in another file, with a human-friendly
/// label for previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLink {
    pub column: &'static str,
    pub target_file: &'static str,
    pub label: &'static str,
}

/// Column → target-file guesses, used when no database is available or the
/// database declares no foreign key for the column.
pub const COLUMN_LINKS: &[ColumnLink] = &[
    ColumnLink { column: "topo", target_file: "topography.hyd", label: "Topography" },
    ColumnLink { column: "hydro", target_file: "hydrology.hyd", label: "Hydrology" },
    ColumnLink { column: "soil", target_file: "soils.sol", label: "Soil" },
    ColumnLink { column: "lu_mgt", target_file: "landuse.lum", label: "Land use management" },
    ColumnLink { column: "soil_plant_init", target_file: "soil_plant.ini", label: "Soil plant initialization" },
    ColumnLink { column: "surf_stor", target_file: "wetland.wet", label: "Surface storage" },
    ColumnLink { column: "snow", target_file: "snow.sno", label: "Snow" },
    ColumnLink { column: "field", target_file: "field.fld", label: "Field" },
    ColumnLink { column: "dlr", target_file: "delratio.del", label: "Delivery ratio" },
    ColumnLink { column: "plnt_typ", target_file: "plants.plt", label: "Plant type" },
    ColumnLink { column: "wst", target_file: "weather-sta.cli", label: "Weather station" },
    ColumnLink { column: "aqu", target_file: "aquifer.aqu", label: "Aquifer" },
    ColumnLink { column: "cha", target_file: "channel.cha", label: "Channel" },
    ColumnLink { column: "res", target_file: "reservoir.res", label: "Reservoir" },
    ColumnLink { column: "rec", target_file: "recall.rec", label: "Recall" },
    ColumnLink { column: "exco", target_file: "exco.exc", label: "Export coefficient" },
];

/// Returns the database table mirrored by a recognized file name.
pub fn table_for_file(file_name: &str) -> Option<&'static str> {
    FILE_TYPES
        .iter()
        .find(|ft| ft.file_name == file_name)
        .map(|ft| ft.table)
}

/// Returns the dataset file mirrored by a recognized table name.
pub fn file_for_table(table: &str) -> Option<&'static str> {
    FILE_TYPES
        .iter()
        .find(|ft| ft.table == table)
        .map(|ft| ft.file_name)
}

/// Guesses the dataset file a column references, from the static link table.
pub fn guess_target_file(column: &str) -> Option<&'static str> {
    COLUMN_LINKS
        .iter()
        .find(|cl| cl.column == column)
        .map(|cl| cl.target_file)
}

/// Guesses the database table a column references, from the static link table.
pub fn guess_target_table(column: &str) -> Option<&'static str> {
    guess_target_file(column).and_then(table_for_file)
}

/// Returns the human-friendly label for a known column.
pub fn column_label(column: &str) -> Option<&'static str> {
    COLUMN_LINKS
        .iter()
        .find(|cl| cl.column == column)
        .map(|cl| cl.label)
}
