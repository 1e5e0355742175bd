//! The `osi3` message set, one entry per `.proto` file of the OSI interface.
//!
//! Fields the table does not list are still accepted in records and kept as
//! unknown fields.

use super::def::{enumeration, message, opt, rep, FileDef, MessageDef, Ty, Ty::*};

const ID: Ty = Message(".osi3.Identifier");
const VERSION: Ty = Message(".osi3.InterfaceVersion");
const TIMESTAMP: Ty = Message(".osi3.Timestamp");
const VEC3: Ty = Message(".osi3.Vector3d");
const VEC2: Ty = Message(".osi3.Vector2d");
const ORIENTATION: Ty = Message(".osi3.Orientation3d");
const DIMENSION: Ty = Message(".osi3.Dimension3d");
const MOUNTING: Ty = Message(".osi3.MountingPosition");
const SPHERICAL: Ty = Message(".osi3.Spherical3d");
const STATIONARY: Ty = Message(".osi3.BaseStationary");
const MOVING: Ty = Message(".osi3.BaseMoving");
const EXTERNAL: Ty = Message(".osi3.ExternalReference");
const LANE_ASSIGNMENT: Ty = Message(".osi3.LogicalLaneAssignment");
const ITEM_HEADER: Ty = Message(".osi3.DetectedItemHeader");

pub(super) const FILES: &[FileDef] = &[
    FileDef {
        name: "osi_version.proto",
        deps: &[],
        messages: &[message(
            "InterfaceVersion",
            &[
                opt("version_major", 1, Uint32),
                opt("version_minor", 2, Uint32),
                opt("version_patch", 3, Uint32),
            ],
        )],
        enums: &[],
    },
    FileDef {
        name: "osi_common.proto",
        deps: &[],
        messages: &[
            message(
                "Vector3d",
                &[opt("x", 1, Double), opt("y", 2, Double), opt("z", 3, Double)],
            ),
            message("Vector2d", &[opt("x", 1, Double), opt("y", 2, Double)]),
            message(
                "Timestamp",
                &[opt("seconds", 1, Int64), opt("nanos", 2, Uint32)],
            ),
            message(
                "Dimension3d",
                &[
                    opt("length", 1, Double),
                    opt("width", 2, Double),
                    opt("height", 3, Double),
                ],
            ),
            message(
                "Orientation3d",
                &[
                    opt("roll", 1, Double),
                    opt("pitch", 2, Double),
                    opt("yaw", 3, Double),
                ],
            ),
            message("Identifier", &[opt("value", 1, Uint64)]),
            message(
                "ExternalReference",
                &[
                    opt("reference", 1, String),
                    opt("type", 2, String),
                    rep("identifier", 3, String),
                ],
            ),
            message(
                "MountingPosition",
                &[opt("position", 1, VEC3), opt("orientation", 2, ORIENTATION)],
            ),
            message(
                "Spherical3d",
                &[
                    opt("distance", 1, Double),
                    opt("azimuth", 2, Double),
                    opt("elevation", 3, Double),
                ],
            ),
            message(
                "LogicalLaneAssignment",
                &[
                    opt("assigned_lane_id", 1, ID),
                    opt("s_position", 2, Double),
                    opt("t_position", 3, Double),
                    opt("angle_to_lane", 4, Double),
                ],
            ),
            message(
                "BaseStationary",
                &[
                    opt("dimension", 1, DIMENSION),
                    opt("position", 2, VEC3),
                    opt("orientation", 3, ORIENTATION),
                    rep("base_polygon", 4, VEC2),
                ],
            ),
            message(
                "BaseMoving",
                &[
                    opt("dimension", 1, DIMENSION),
                    opt("position", 2, VEC3),
                    opt("orientation", 3, ORIENTATION),
                    opt("velocity", 4, VEC3),
                    opt("acceleration", 5, VEC3),
                    opt("orientation_rate", 6, ORIENTATION),
                    opt("orientation_acceleration", 7, ORIENTATION),
                    rep("base_polygon", 8, VEC2),
                ],
            ),
            message(
                "StatePoint",
                &[
                    opt("timestamp", 1, TIMESTAMP),
                    opt("position", 2, VEC3),
                    opt("orientation", 3, ORIENTATION),
                ],
            ),
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_object.proto",
        deps: &["osi_common.proto"],
        messages: &[
            MessageDef {
                nested: &[MessageDef {
                    enums: &[
                        enumeration(
                            "Type",
                            &[
                                ("TYPE_UNKNOWN", 0),
                                ("TYPE_OTHER", 1),
                                ("TYPE_BRIDGE", 2),
                                ("TYPE_BUILDING", 3),
                                ("TYPE_POLE", 4),
                                ("TYPE_PYLON", 5),
                                ("TYPE_DELINEATOR", 6),
                                ("TYPE_TREE", 7),
                                ("TYPE_BARRIER", 8),
                                ("TYPE_VEGETATION", 9),
                                ("TYPE_CURBSTONE", 10),
                                ("TYPE_WALL", 11),
                                ("TYPE_VERTICAL_STRUCTURE", 12),
                                ("TYPE_RECTANGULAR_STRUCTURE", 13),
                                ("TYPE_OVERHANGING_STRUCTURE", 14),
                                ("TYPE_REFLECTIVE_STRUCTURE", 15),
                                ("TYPE_CONSTRUCTION_SITE_ELEMENT", 16),
                                ("TYPE_SPEED_BUMP", 17),
                                ("TYPE_EMITTING_STRUCTURE", 18),
                            ],
                        ),
                        enumeration(
                            "Material",
                            &[
                                ("MATERIAL_UNKNOWN", 0),
                                ("MATERIAL_OTHER", 1),
                                ("MATERIAL_WOOD", 2),
                                ("MATERIAL_PLASTIC", 3),
                                ("MATERIAL_CONCRETE", 4),
                                ("MATERIAL_METAL", 5),
                                ("MATERIAL_STONE", 6),
                                ("MATERIAL_GLAS", 7),
                                ("MATERIAL_MUD", 8),
                            ],
                        ),
                        enumeration(
                            "Density",
                            &[
                                ("DENSITY_UNKNOWN", 0),
                                ("DENSITY_OTHER", 1),
                                ("DENSITY_SOLID", 2),
                                ("DENSITY_SMALL_MESH", 3),
                                ("DENSITY_MEDIAN_MESH", 4),
                                ("DENSITY_LARGE_MESH", 5),
                                ("DENSITY_OPEN", 6),
                            ],
                        ),
                        enumeration(
                            "Color",
                            &[
                                ("COLOR_UNKNOWN", 0),
                                ("COLOR_OTHER", 1),
                                ("COLOR_YELLOW", 2),
                                ("COLOR_GREEN", 3),
                                ("COLOR_BLUE", 4),
                                ("COLOR_VIOLET", 5),
                                ("COLOR_RED", 6),
                                ("COLOR_ORANGE", 7),
                                ("COLOR_BLACK", 8),
                                ("COLOR_GREY", 9),
                                ("COLOR_WHITE", 10),
                            ],
                        ),
                    ],
                    ..message(
                        "Classification",
                        &[
                            opt("type", 1, Enum(".osi3.StationaryObject.Classification.Type")),
                            opt(
                                "material",
                                2,
                                Enum(".osi3.StationaryObject.Classification.Material"),
                            ),
                            opt(
                                "density",
                                3,
                                Enum(".osi3.StationaryObject.Classification.Density"),
                            ),
                            opt("color", 4, Enum(".osi3.StationaryObject.Classification.Color")),
                            rep("assigned_lane_id", 6, ID),
                            rep("assigned_lane_percentage", 7, Double),
                            rep("logical_lane_assignment", 8, LANE_ASSIGNMENT),
                        ],
                    )
                }],
                ..message(
                    "StationaryObject",
                    &[
                        opt("id", 1, ID),
                        opt("base", 2, STATIONARY),
                        opt("classification", 3, Message(".osi3.StationaryObject.Classification")),
                        opt("model_reference", 4, String),
                        rep("source_reference", 5, EXTERNAL),
                    ],
                )
            },
            MessageDef {
                nested: &[
                    message(
                        "VehicleAttributes",
                        &[
                            opt("driver_id", 1, ID),
                            opt("radius_wheel", 2, Double),
                            opt("number_wheels", 3, Uint32),
                            opt("bbcenter_to_rear", 4, VEC3),
                            opt("bbcenter_to_front", 5, VEC3),
                            opt("ground_clearance", 6, Double),
                            rep(
                                "wheel_data",
                                7,
                                Message(".osi3.MovingObject.VehicleAttributes.WheelData"),
                            ),
                            opt("steering_wheel_angle", 8, Double),
                        ],
                    )
                    .with_nested(&[message(
                        "WheelData",
                        &[
                            opt("axle", 1, Uint32),
                            opt("index", 2, Uint32),
                            opt("position", 3, VEC3),
                            opt("wheel_radius", 4, Double),
                            opt("rim_radius", 5, Double),
                            opt("width", 6, Double),
                            opt("orientation", 7, ORIENTATION),
                            opt("rotation_rate", 8, Double),
                            opt("model_reference", 9, String),
                            opt("friction_coefficient", 10, Double),
                        ],
                    )]),
                    MessageDef {
                        nested: &[MessageDef {
                            enums: &[
                                enumeration(
                                    "IndicatorState",
                                    &[
                                        ("INDICATOR_STATE_UNKNOWN", 0),
                                        ("INDICATOR_STATE_OTHER", 1),
                                        ("INDICATOR_STATE_OFF", 2),
                                        ("INDICATOR_STATE_LEFT", 3),
                                        ("INDICATOR_STATE_RIGHT", 4),
                                        ("INDICATOR_STATE_WARNING", 5),
                                    ],
                                ),
                                enumeration(
                                    "GenericLightState",
                                    &[
                                        ("GENERIC_LIGHT_STATE_UNKNOWN", 0),
                                        ("GENERIC_LIGHT_STATE_OTHER", 1),
                                        ("GENERIC_LIGHT_STATE_OFF", 2),
                                        ("GENERIC_LIGHT_STATE_ON", 3),
                                        ("GENERIC_LIGHT_STATE_FLASHING_BLUE", 4),
                                        ("GENERIC_LIGHT_STATE_FLASHING_BLUE_AND_RED", 5),
                                        ("GENERIC_LIGHT_STATE_FLASHING_AMBER", 6),
                                    ],
                                ),
                                enumeration(
                                    "BrakeLightState",
                                    &[
                                        ("BRAKE_LIGHT_STATE_UNKNOWN", 0),
                                        ("BRAKE_LIGHT_STATE_OTHER", 1),
                                        ("BRAKE_LIGHT_STATE_OFF", 2),
                                        ("BRAKE_LIGHT_STATE_NORMAL", 3),
                                        ("BRAKE_LIGHT_STATE_STRONG", 4),
                                    ],
                                ),
                            ],
                            ..message(
                                "LightState",
                                &[
                                    opt("indicator_state", 1, Enum(LIGHT_INDICATOR)),
                                    opt("front_fog_light", 2, Enum(LIGHT_GENERIC)),
                                    opt("rear_fog_light", 3, Enum(LIGHT_GENERIC)),
                                    opt("head_light", 4, Enum(LIGHT_GENERIC)),
                                    opt("high_beam", 5, Enum(LIGHT_GENERIC)),
                                    opt("reversing_light", 6, Enum(LIGHT_GENERIC)),
                                    opt("brake_light_state", 7, Enum(LIGHT_BRAKE)),
                                    opt("license_plate_illumination_rear", 8, Enum(LIGHT_GENERIC)),
                                    opt("emergency_vehicle_illumination", 9, Enum(LIGHT_GENERIC)),
                                    opt("service_vehicle_illumination", 10, Enum(LIGHT_GENERIC)),
                                ],
                            )
                        }],
                        enums: &[
                            enumeration(
                                "Type",
                                &[
                                    ("TYPE_UNKNOWN", 0),
                                    ("TYPE_OTHER", 1),
                                    ("TYPE_SMALL_CAR", 2),
                                    ("TYPE_COMPACT_CAR", 3),
                                    ("TYPE_MEDIUM_CAR", 4),
                                    ("TYPE_LUXURY_CAR", 5),
                                    ("TYPE_DELIVERY_VAN", 6),
                                    ("TYPE_HEAVY_TRUCK", 7),
                                    ("TYPE_SEMITRAILER", 8),
                                    ("TYPE_TRAILER", 9),
                                    ("TYPE_MOTORBIKE", 10),
                                    ("TYPE_BICYCLE", 11),
                                    ("TYPE_BUS", 12),
                                    ("TYPE_TRAM", 13),
                                    ("TYPE_TRAIN", 14),
                                    ("TYPE_WHEELCHAIR", 15),
                                ],
                            ),
                            enumeration(
                                "Role",
                                &[
                                    ("ROLE_UNKNOWN", 0),
                                    ("ROLE_OTHER", 1),
                                    ("ROLE_CIVIL", 2),
                                    ("ROLE_AMBULANCE", 3),
                                    ("ROLE_FIRE", 4),
                                    ("ROLE_POLICE", 5),
                                    ("ROLE_PUBLIC_TRANSPORT", 6),
                                    ("ROLE_ROAD_ASSISTANCE", 7),
                                    ("ROLE_GARBAGE_COLLECTION", 8),
                                    ("ROLE_ROAD_CONSTRUCTION", 9),
                                    ("ROLE_MILITARY", 10),
                                ],
                            ),
                        ],
                        ..message(
                            "VehicleClassification",
                            &[
                                opt("type", 1, Enum(".osi3.MovingObject.VehicleClassification.Type")),
                                opt(
                                    "light_state",
                                    2,
                                    Message(".osi3.MovingObject.VehicleClassification.LightState"),
                                ),
                                opt("has_trailer", 3, Bool),
                                opt("trailer_id", 4, ID),
                                opt("role", 5, Enum(".osi3.MovingObject.VehicleClassification.Role")),
                            ],
                        )
                    },
                    message(
                        "MovingObjectClassification",
                        &[
                            rep("assigned_lane_id", 1, ID),
                            rep("assigned_lane_percentage", 2, Double),
                            rep("logical_lane_assignment", 3, LANE_ASSIGNMENT),
                        ],
                    ),
                ],
                enums: &[enumeration(
                    "Type",
                    &[
                        ("TYPE_UNKNOWN", 0),
                        ("TYPE_OTHER", 1),
                        ("TYPE_VEHICLE", 2),
                        ("TYPE_PEDESTRIAN", 3),
                        ("TYPE_ANIMAL", 4),
                    ],
                )],
                ..message(
                    "MovingObject",
                    &[
                        opt("id", 1, ID),
                        opt("base", 2, MOVING),
                        opt("type", 3, Enum(".osi3.MovingObject.Type")),
                        rep("assigned_lane_id", 4, ID),
                        opt(
                            "vehicle_attributes",
                            5,
                            Message(".osi3.MovingObject.VehicleAttributes"),
                        ),
                        opt(
                            "vehicle_classification",
                            6,
                            Message(".osi3.MovingObject.VehicleClassification"),
                        ),
                        opt("model_reference", 7, String),
                        rep("future_trajectory", 8, Message(".osi3.StatePoint")),
                        opt(
                            "moving_object_classification",
                            9,
                            Message(".osi3.MovingObject.MovingObjectClassification"),
                        ),
                        rep("source_reference", 10, EXTERNAL),
                    ],
                )
            },
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_trafficsign.proto",
        deps: &["osi_common.proto"],
        messages: &[
            MessageDef {
                enums: &[enumeration(
                    "Unit",
                    &[
                        ("UNIT_UNKNOWN", 0),
                        ("UNIT_OTHER", 1),
                        ("UNIT_NO_UNIT", 2),
                        ("UNIT_KILOMETER_PER_HOUR", 3),
                        ("UNIT_MILE_PER_HOUR", 4),
                        ("UNIT_METER", 5),
                        ("UNIT_KILOMETER", 6),
                        ("UNIT_FEET", 7),
                        ("UNIT_MILE", 8),
                        ("UNIT_METRIC_TON", 9),
                        ("UNIT_LONG_TON", 10),
                        ("UNIT_SHORT_TON", 11),
                    ],
                )],
                ..message(
                    "TrafficSignValue",
                    &[
                        opt("value", 1, Double),
                        opt("value_unit", 2, Enum(".osi3.TrafficSignValue.Unit")),
                        opt("text", 3, String),
                    ],
                )
            },
            MessageDef {
                nested: &[
                    MessageDef {
                        nested: &[MessageDef {
                            enums: &[
                                enumeration(
                                    "Type",
                                    &[("TYPE_UNKNOWN", 0), ("TYPE_OTHER", 1)],
                                ),
                                enumeration(
                                    "DirectionScope",
                                    &[
                                        ("DIRECTION_SCOPE_UNKNOWN", 0),
                                        ("DIRECTION_SCOPE_OTHER", 1),
                                        ("DIRECTION_SCOPE_NO_DIRECTION", 2),
                                        ("DIRECTION_SCOPE_LEFT", 3),
                                        ("DIRECTION_SCOPE_RIGHT", 4),
                                        ("DIRECTION_SCOPE_LEFT_RIGHT", 5),
                                    ],
                                ),
                            ],
                            ..message(
                                "Classification",
                                &[
                                    opt("variability", 1, Enum(".osi3.TrafficSign.Variability")),
                                    opt("type", 2, Enum(MAIN_SIGN_TYPE)),
                                    opt("value", 3, Message(".osi3.TrafficSignValue")),
                                    opt(
                                        "direction_scope",
                                        4,
                                        Enum(".osi3.TrafficSign.MainSign.Classification.DirectionScope"),
                                    ),
                                    rep("assigned_lane_id", 5, ID),
                                    opt("vertically_mirrored", 6, Bool),
                                    opt("is_out_of_service", 7, Bool),
                                ],
                            )
                        }],
                        ..message(
                            "MainSign",
                            &[
                                opt("base", 1, STATIONARY),
                                opt(
                                    "classification",
                                    2,
                                    Message(".osi3.TrafficSign.MainSign.Classification"),
                                ),
                                opt("model_reference", 3, String),
                            ],
                        )
                    },
                    MessageDef {
                        nested: &[MessageDef {
                            enums: &[enumeration(
                                "Type",
                                &[("TYPE_UNKNOWN", 0), ("TYPE_OTHER", 1)],
                            )],
                            ..message(
                                "Classification",
                                &[
                                    opt("variability", 1, Enum(".osi3.TrafficSign.Variability")),
                                    opt(
                                        "type",
                                        2,
                                        Enum(".osi3.TrafficSign.SupplementarySign.Classification.Type"),
                                    ),
                                    rep("value", 3, Message(".osi3.TrafficSignValue")),
                                    rep("assigned_lane_id", 4, ID),
                                ],
                            )
                        }],
                        ..message(
                            "SupplementarySign",
                            &[
                                opt("base", 1, STATIONARY),
                                opt(
                                    "classification",
                                    2,
                                    Message(".osi3.TrafficSign.SupplementarySign.Classification"),
                                ),
                                opt("model_reference", 3, String),
                            ],
                        )
                    },
                ],
                enums: &[enumeration(
                    "Variability",
                    &[
                        ("VARIABILITY_UNKNOWN", 0),
                        ("VARIABILITY_OTHER", 1),
                        ("VARIABILITY_FIXED", 2),
                        ("VARIABILITY_VARIABLE", 3),
                    ],
                )],
                ..message(
                    "TrafficSign",
                    &[
                        opt("id", 1, ID),
                        opt("main_sign", 2, Message(".osi3.TrafficSign.MainSign")),
                        rep(
                            "supplementary_sign",
                            3,
                            Message(".osi3.TrafficSign.SupplementarySign"),
                        ),
                        rep("source_reference", 4, EXTERNAL),
                    ],
                )
            },
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_trafficlight.proto",
        deps: &["osi_common.proto"],
        messages: &[MessageDef {
            nested: &[MessageDef {
                enums: &[
                    enumeration(
                        "Color",
                        &[
                            ("COLOR_UNKNOWN", 0),
                            ("COLOR_OTHER", 1),
                            ("COLOR_RED", 2),
                            ("COLOR_YELLOW", 3),
                            ("COLOR_GREEN", 4),
                            ("COLOR_BLUE", 5),
                            ("COLOR_WHITE", 6),
                        ],
                    ),
                    enumeration(
                        "Icon",
                        &[("ICON_UNKNOWN", 0), ("ICON_OTHER", 1), ("ICON_NONE", 2)],
                    ),
                    enumeration(
                        "Mode",
                        &[
                            ("MODE_UNKNOWN", 0),
                            ("MODE_OTHER", 1),
                            ("MODE_OFF", 2),
                            ("MODE_CONSTANT", 3),
                            ("MODE_FLASHING", 4),
                            ("MODE_COUNTING", 5),
                        ],
                    ),
                ],
                ..message(
                    "Classification",
                    &[
                        opt("color", 1, Enum(".osi3.TrafficLight.Classification.Color")),
                        opt("icon", 2, Enum(".osi3.TrafficLight.Classification.Icon")),
                        opt("mode", 3, Enum(".osi3.TrafficLight.Classification.Mode")),
                        opt("counter", 4, Double),
                        rep("assigned_lane_id", 5, ID),
                        opt("is_out_of_service", 6, Bool),
                        rep("logical_lane_assignment", 7, LANE_ASSIGNMENT),
                    ],
                )
            }],
            ..message(
                "TrafficLight",
                &[
                    opt("id", 1, ID),
                    opt("base", 2, STATIONARY),
                    opt("classification", 3, Message(".osi3.TrafficLight.Classification")),
                    opt("model_reference", 4, String),
                    rep("source_reference", 5, EXTERNAL),
                ],
            )
        }],
        enums: &[],
    },
    FileDef {
        name: "osi_roadmarking.proto",
        deps: &["osi_common.proto", "osi_trafficsign.proto"],
        messages: &[MessageDef {
            nested: &[MessageDef {
                enums: &[
                    enumeration(
                        "Type",
                        &[
                            ("TYPE_UNKNOWN", 0),
                            ("TYPE_OTHER", 1),
                            ("TYPE_PAINTED_TRAFFIC_SIGN", 2),
                            ("TYPE_SYMBOLIC_TRAFFIC_SIGN", 3),
                            ("TYPE_TEXTUAL_TRAFFIC_SIGN", 4),
                            ("TYPE_GENERIC_SYMBOL", 5),
                            ("TYPE_GENERIC_LINE", 6),
                            ("TYPE_GENERIC_TEXT", 7),
                        ],
                    ),
                    enumeration(
                        "Color",
                        &[
                            ("COLOR_UNKNOWN", 0),
                            ("COLOR_OTHER", 1),
                            ("COLOR_WHITE", 2),
                            ("COLOR_YELLOW", 3),
                            ("COLOR_BLUE", 5),
                            ("COLOR_RED", 6),
                            ("COLOR_GREEN", 7),
                            ("COLOR_VIOLET", 8),
                            ("COLOR_ORANGE", 9),
                        ],
                    ),
                ],
                ..message(
                    "Classification",
                    &[
                        opt("type", 1, Enum(".osi3.RoadMarking.Classification.Type")),
                        opt("traffic_main_sign_type", 2, Enum(MAIN_SIGN_TYPE)),
                        opt(
                            "monochrome_color",
                            3,
                            Enum(".osi3.RoadMarking.Classification.Color"),
                        ),
                        opt("value", 4, Message(".osi3.TrafficSignValue")),
                        opt("value_text", 5, String),
                        rep("assigned_lane_id", 6, ID),
                        opt("is_out_of_service", 7, Bool),
                    ],
                )
            }],
            ..message(
                "RoadMarking",
                &[
                    opt("id", 1, ID),
                    opt("base", 2, STATIONARY),
                    opt("classification", 3, Message(".osi3.RoadMarking.Classification")),
                    rep("source_reference", 4, EXTERNAL),
                ],
            )
        }],
        enums: &[],
    },
    FileDef {
        name: "osi_lane.proto",
        deps: &["osi_common.proto"],
        messages: &[
            MessageDef {
                nested: &[MessageDef {
                    nested: &[
                        message(
                            "LanePairing",
                            &[opt("antecessor_lane_id", 1, ID), opt("successor_lane_id", 2, ID)],
                        ),
                        message(
                            "RoadCondition",
                            &[
                                opt("surface_temperature", 1, Double),
                                opt("surface_water_film", 2, Double),
                                opt("surface_freezing_point", 3, Double),
                                opt("surface_ice", 4, Double),
                                opt("surface_roughness", 5, Double),
                                opt("surface_texture", 6, Double),
                            ],
                        ),
                    ],
                    enums: &[enumeration(
                        "Type",
                        &[
                            ("TYPE_UNKNOWN", 0),
                            ("TYPE_OTHER", 1),
                            ("TYPE_DRIVING", 2),
                            ("TYPE_NONDRIVING", 3),
                            ("TYPE_INTERSECTION", 4),
                        ],
                    )],
                    ..message(
                        "Classification",
                        &[
                            opt("type", 1, Enum(".osi3.Lane.Classification.Type")),
                            opt("is_host_vehicle_lane", 2, Bool),
                            rep("centerline", 3, VEC3),
                            opt("centerline_is_driving_direction", 4, Bool),
                            rep("left_adjacent_lane_id", 5, ID),
                            rep("right_adjacent_lane_id", 6, ID),
                            rep(
                                "lane_pairing",
                                7,
                                Message(".osi3.Lane.Classification.LanePairing"),
                            ),
                            rep("right_lane_boundary_id", 8, ID),
                            rep("left_lane_boundary_id", 9, ID),
                            rep("free_lane_boundary_id", 10, ID),
                            opt(
                                "road_condition",
                                11,
                                Message(".osi3.Lane.Classification.RoadCondition"),
                            ),
                        ],
                    )
                }],
                ..message(
                    "Lane",
                    &[
                        opt("id", 1, ID),
                        opt("classification", 2, Message(".osi3.Lane.Classification")),
                        rep("source_reference", 3, EXTERNAL),
                    ],
                )
            },
            MessageDef {
                nested: &[
                    MessageDef {
                        enums: &[enumeration(
                            "Dash",
                            &[
                                ("DASH_UNKNOWN", 0),
                                ("DASH_OTHER", 1),
                                ("DASH_START", 2),
                                ("DASH_CONTINUE", 3),
                                ("DASH_END", 4),
                                ("DASH_GAP", 5),
                            ],
                        )],
                        ..message(
                            "BoundaryPoint",
                            &[
                                opt("position", 1, VEC3),
                                opt("width", 2, Double),
                                opt("height", 3, Double),
                                opt("dash", 4, Enum(".osi3.LaneBoundary.BoundaryPoint.Dash")),
                            ],
                        )
                    },
                    MessageDef {
                        enums: &[
                            enumeration(
                                "Type",
                                &[
                                    ("TYPE_UNKNOWN", 0),
                                    ("TYPE_OTHER", 1),
                                    ("TYPE_NO_LINE", 2),
                                    ("TYPE_SOLID_LINE", 3),
                                    ("TYPE_DASHED_LINE", 4),
                                    ("TYPE_BOTTS_DOTS", 5),
                                    ("TYPE_ROAD_EDGE", 6),
                                    ("TYPE_SNOW_EDGE", 7),
                                    ("TYPE_GRASS_EDGE", 8),
                                    ("TYPE_GRAVEL_EDGE", 9),
                                    ("TYPE_SOIL_EDGE", 10),
                                    ("TYPE_GUARD_RAIL", 11),
                                    ("TYPE_CURB", 12),
                                    ("TYPE_STRUCTURE", 13),
                                    ("TYPE_BARRIER", 14),
                                    ("TYPE_SOUND_BARRIER", 15),
                                ],
                            ),
                            enumeration(
                                "Color",
                                &[
                                    ("COLOR_UNKNOWN", 0),
                                    ("COLOR_OTHER", 1),
                                    ("COLOR_NONE", 2),
                                    ("COLOR_WHITE", 3),
                                    ("COLOR_YELLOW", 4),
                                    ("COLOR_RED", 5),
                                    ("COLOR_BLUE", 6),
                                    ("COLOR_GREEN", 7),
                                    ("COLOR_VIOLET", 8),
                                    ("COLOR_ORANGE", 9),
                                ],
                            ),
                        ],
                        ..message(
                            "Classification",
                            &[
                                opt("type", 1, Enum(".osi3.LaneBoundary.Classification.Type")),
                                opt("color", 2, Enum(".osi3.LaneBoundary.Classification.Color")),
                                rep("limiting_structure_id", 3, ID),
                            ],
                        )
                    },
                ],
                ..message(
                    "LaneBoundary",
                    &[
                        opt("id", 1, ID),
                        rep("boundary_line", 2, Message(".osi3.LaneBoundary.BoundaryPoint")),
                        opt("classification", 3, Message(".osi3.LaneBoundary.Classification")),
                        rep("source_reference", 4, EXTERNAL),
                    ],
                )
            },
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_environment.proto",
        deps: &["osi_common.proto"],
        messages: &[MessageDef {
            nested: &[message("TimeOfDay", &[opt("seconds_since_midnight", 1, Uint32)])],
            enums: &[
                enumeration(
                    "AmbientIllumination",
                    &[
                        ("AMBIENT_ILLUMINATION_UNKNOWN", 0),
                        ("AMBIENT_ILLUMINATION_OTHER", 1),
                        ("AMBIENT_ILLUMINATION_LEVEL1", 2),
                        ("AMBIENT_ILLUMINATION_LEVEL2", 3),
                        ("AMBIENT_ILLUMINATION_LEVEL3", 4),
                        ("AMBIENT_ILLUMINATION_LEVEL4", 5),
                        ("AMBIENT_ILLUMINATION_LEVEL5", 6),
                        ("AMBIENT_ILLUMINATION_LEVEL6", 7),
                        ("AMBIENT_ILLUMINATION_LEVEL7", 8),
                        ("AMBIENT_ILLUMINATION_LEVEL8", 9),
                        ("AMBIENT_ILLUMINATION_LEVEL9", 10),
                    ],
                ),
                enumeration(
                    "Precipitation",
                    &[
                        ("PRECIPITATION_UNKNOWN", 0),
                        ("PRECIPITATION_OTHER", 1),
                        ("PRECIPITATION_NONE", 2),
                        ("PRECIPITATION_VERY_LIGHT", 3),
                        ("PRECIPITATION_LIGHT", 4),
                        ("PRECIPITATION_MODERATE", 5),
                        ("PRECIPITATION_HEAVY", 6),
                        ("PRECIPITATION_VERY_HEAVY", 7),
                        ("PRECIPITATION_EXTREME", 8),
                    ],
                ),
                enumeration(
                    "Fog",
                    &[
                        ("FOG_UNKNOWN", 0),
                        ("FOG_OTHER", 1),
                        ("FOG_EXCELLENT_VISIBILITY", 2),
                        ("FOG_GOOD_VISIBILITY", 3),
                        ("FOG_MODERATE_VISIBILITY", 4),
                        ("FOG_POOR_VISIBILITY", 5),
                        ("FOG_MIST", 6),
                        ("FOG_LIGHT", 7),
                        ("FOG_THICK", 8),
                        ("FOG_DENSE", 9),
                    ],
                ),
            ],
            ..message(
                "EnvironmentalConditions",
                &[
                    opt(
                        "ambient_illumination",
                        1,
                        Enum(".osi3.EnvironmentalConditions.AmbientIllumination"),
                    ),
                    opt(
                        "time_of_day",
                        2,
                        Message(".osi3.EnvironmentalConditions.TimeOfDay"),
                    ),
                    opt("atmospheric_pressure", 3, Double),
                    opt("temperature", 4, Double),
                    opt("relative_humidity", 5, Double),
                    opt(
                        "precipitation",
                        6,
                        Enum(".osi3.EnvironmentalConditions.Precipitation"),
                    ),
                    opt("fog", 7, Enum(".osi3.EnvironmentalConditions.Fog")),
                    opt("unix_timestamp", 8, Int64),
                    rep("source_reference", 9, EXTERNAL),
                ],
            )
        }],
        enums: &[],
    },
    FileDef {
        name: "osi_occupant.proto",
        deps: &["osi_common.proto"],
        messages: &[MessageDef {
            nested: &[MessageDef {
                enums: &[
                    enumeration(
                        "Seat",
                        &[
                            ("SEAT_UNKNOWN", 0),
                            ("SEAT_OTHER", 1),
                            ("SEAT_FRONT_LEFT", 2),
                            ("SEAT_FRONT_RIGHT", 3),
                            ("SEAT_FRONT_MIDDLE", 4),
                            ("SEAT_BACK_LEFT", 5),
                            ("SEAT_BACK_RIGHT", 6),
                            ("SEAT_BACK_MIDDLE", 7),
                            ("SEAT_THIRD_ROW_LEFT", 8),
                            ("SEAT_THIRD_ROW_RIGHT", 9),
                            ("SEAT_THIRD_ROW_MIDDLE", 10),
                        ],
                    ),
                    enumeration(
                        "SteeringControl",
                        &[
                            ("STEERING_CONTROL_UNKNOWN", 0),
                            ("STEERING_CONTROL_OTHER", 1),
                            ("STEERING_CONTROL_NO_HAND", 2),
                            ("STEERING_CONTROL_ONE_HAND", 3),
                            ("STEERING_CONTROL_BOTH_HANDS", 4),
                            ("STEERING_CONTROL_LEFT_HAND", 5),
                            ("STEERING_CONTROL_RIGHT_HAND", 6),
                        ],
                    ),
                ],
                ..message(
                    "Classification",
                    &[
                        opt("is_driver", 1, Bool),
                        opt("seat", 2, Enum(".osi3.Occupant.Classification.Seat")),
                        opt(
                            "steering_control",
                            3,
                            Enum(".osi3.Occupant.Classification.SteeringControl"),
                        ),
                    ],
                )
            }],
            ..message(
                "Occupant",
                &[
                    opt("id", 1, ID),
                    opt("classification", 2, Message(".osi3.Occupant.Classification")),
                    rep("source_reference", 3, EXTERNAL),
                ],
            )
        }],
        enums: &[],
    },
    FileDef {
        name: "osi_referenceline.proto",
        deps: &["osi_common.proto"],
        messages: &[MessageDef {
            nested: &[message(
                "ReferenceLinePoint",
                &[
                    opt("world_position", 1, VEC3),
                    opt("s_position", 2, Double),
                    opt("t_axis_yaw", 3, Double),
                ],
            )],
            enums: &[enumeration(
                "Type",
                &[
                    ("TYPE_UNKNOWN", 0),
                    ("TYPE_POLYLINE", 1),
                    ("TYPE_POLYLINE_WITH_T_AXIS", 2),
                ],
            )],
            ..message(
                "ReferenceLine",
                &[
                    opt("id", 1, ID),
                    opt("type", 2, Enum(".osi3.ReferenceLine.Type")),
                    rep("poly_line", 3, Message(".osi3.ReferenceLine.ReferenceLinePoint")),
                ],
            )
        }],
        enums: &[],
    },
    FileDef {
        name: "osi_logicallane.proto",
        deps: &["osi_common.proto"],
        messages: &[
            MessageDef {
                nested: &[message(
                    "LogicalBoundaryPoint",
                    &[
                        opt("position", 1, VEC3),
                        opt("s_position", 2, Double),
                        opt("t_position", 3, Double),
                    ],
                )],
                enums: &[enumeration(
                    "PassingRule",
                    &[
                        ("PASSING_RULE_UNKNOWN", 0),
                        ("PASSING_RULE_OTHER", 1),
                        ("PASSING_RULE_NONE_ALLOWED", 2),
                        ("PASSING_RULE_INCREASING_T", 3),
                        ("PASSING_RULE_DECREASING_T", 4),
                        ("PASSING_RULE_BOTH_ALLOWED", 5),
                    ],
                )],
                ..message(
                    "LogicalLaneBoundary",
                    &[
                        opt("id", 1, ID),
                        rep(
                            "boundary_line",
                            2,
                            Message(".osi3.LogicalLaneBoundary.LogicalBoundaryPoint"),
                        ),
                        opt("reference_line_id", 3, ID),
                        rep("physical_boundary_id", 4, ID),
                        opt(
                            "passing_rule",
                            5,
                            Enum(".osi3.LogicalLaneBoundary.PassingRule"),
                        ),
                        rep("source_reference", 6, EXTERNAL),
                    ],
                )
            },
            MessageDef {
                nested: &[message(
                    "PhysicalLaneReference",
                    &[
                        opt("physical_lane_id", 1, ID),
                        opt("start_s", 2, Double),
                        opt("end_s", 3, Double),
                    ],
                )],
                enums: &[
                    enumeration(
                        "Type",
                        &[
                            ("TYPE_UNKNOWN", 0),
                            ("TYPE_OTHER", 1),
                            ("TYPE_NORMAL", 2),
                            ("TYPE_BIKING", 3),
                            ("TYPE_SIDEWALK", 4),
                            ("TYPE_PARKING", 5),
                            ("TYPE_STOP", 6),
                            ("TYPE_RESTRICTED", 7),
                            ("TYPE_BORDER", 8),
                            ("TYPE_SHOULDER", 9),
                            ("TYPE_EXIT", 10),
                            ("TYPE_ENTRY", 11),
                            ("TYPE_ONRAMP", 12),
                            ("TYPE_OFFRAMP", 13),
                            ("TYPE_CONNECTINGRAMP", 14),
                            ("TYPE_MEDIAN", 15),
                            ("TYPE_CURB", 16),
                            ("TYPE_RAIL", 17),
                            ("TYPE_TRAM", 18),
                        ],
                    ),
                    enumeration(
                        "MoveDirection",
                        &[
                            ("MOVE_DIRECTION_UNKNOWN", 0),
                            ("MOVE_DIRECTION_OTHER", 1),
                            ("MOVE_DIRECTION_INCREASING_S", 2),
                            ("MOVE_DIRECTION_DECREASING_S", 3),
                            ("MOVE_DIRECTION_BOTH_ALLOWED", 4),
                        ],
                    ),
                ],
                ..message(
                    "LogicalLane",
                    &[
                        opt("id", 1, ID),
                        opt("type", 2, Enum(".osi3.LogicalLane.Type")),
                        rep("source_reference", 3, EXTERNAL),
                        rep(
                            "physical_lane_reference",
                            4,
                            Message(".osi3.LogicalLane.PhysicalLaneReference"),
                        ),
                        opt("reference_line_id", 5, ID),
                        opt("start_s", 6, Double),
                        opt("end_s", 7, Double),
                        opt("move_direction", 8, Enum(".osi3.LogicalLane.MoveDirection")),
                        rep("right_boundary_id", 12, ID),
                        rep("left_boundary_id", 13, ID),
                        opt("street_name", 16, String),
                    ],
                )
            },
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_groundtruth.proto",
        deps: &[
            "osi_version.proto",
            "osi_common.proto",
            "osi_environment.proto",
            "osi_trafficsign.proto",
            "osi_trafficlight.proto",
            "osi_roadmarking.proto",
            "osi_lane.proto",
            "osi_object.proto",
            "osi_occupant.proto",
            "osi_referenceline.proto",
            "osi_logicallane.proto",
        ],
        messages: &[message(
            "GroundTruth",
            &[
                opt("version", 1, VERSION),
                opt("timestamp", 2, TIMESTAMP),
                opt("host_vehicle_id", 3, ID),
                rep("stationary_object", 4, Message(".osi3.StationaryObject")),
                rep("moving_object", 5, Message(".osi3.MovingObject")),
                rep("traffic_sign", 6, Message(".osi3.TrafficSign")),
                rep("traffic_light", 7, Message(".osi3.TrafficLight")),
                rep("road_marking", 8, Message(".osi3.RoadMarking")),
                rep("lane_boundary", 9, Message(".osi3.LaneBoundary")),
                rep("lane", 10, Message(".osi3.Lane")),
                rep("occupant", 11, Message(".osi3.Occupant")),
                opt(
                    "environmental_conditions",
                    12,
                    Message(".osi3.EnvironmentalConditions"),
                ),
                opt("country_code", 13, Uint32),
                opt("proj_string", 14, String),
                opt("map_reference", 15, String),
                opt("model_reference", 16, String),
                rep("reference_line", 17, Message(".osi3.ReferenceLine")),
                rep("logical_lane_boundary", 18, Message(".osi3.LogicalLaneBoundary")),
                rep("logical_lane", 19, Message(".osi3.LogicalLane")),
            ],
        )],
        enums: &[],
    },
    FileDef {
        name: "osi_hostvehicledata.proto",
        deps: &["osi_common.proto"],
        messages: &[message(
            "HostVehicleData",
            &[
                opt("location", 1, MOVING),
                opt("location_rmse", 2, MOVING),
                opt("host_vehicle_id", 3, ID),
            ],
        )],
        enums: &[],
    },
    FileDef {
        name: "osi_sensorviewconfiguration.proto",
        deps: &["osi_common.proto"],
        messages: &[
            message("GenericSensorViewConfiguration", VIEW_CONFIGURATION),
            message("RadarSensorViewConfiguration", VIEW_CONFIGURATION),
            message("LidarSensorViewConfiguration", VIEW_CONFIGURATION),
            message("CameraSensorViewConfiguration", VIEW_CONFIGURATION),
            message("UltrasonicSensorViewConfiguration", VIEW_CONFIGURATION),
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_sensorview.proto",
        deps: &[
            "osi_version.proto",
            "osi_common.proto",
            "osi_groundtruth.proto",
            "osi_hostvehicledata.proto",
            "osi_sensorviewconfiguration.proto",
        ],
        messages: &[
            message(
                "SensorView",
                &[
                    opt("version", 1, VERSION),
                    opt("timestamp", 2, TIMESTAMP),
                    opt("sensor_id", 3, ID),
                    opt("mounting_position", 4, MOUNTING),
                    opt("mounting_position_rmse", 5, MOUNTING),
                    opt("host_vehicle_data", 6, Message(".osi3.HostVehicleData")),
                    opt("global_ground_truth", 7, Message(".osi3.GroundTruth")),
                    opt("host_vehicle_id", 8, ID),
                    rep("generic_sensor_view", 1000, Message(".osi3.GenericSensorView")),
                    rep("radar_sensor_view", 1001, Message(".osi3.RadarSensorView")),
                    rep("lidar_sensor_view", 1002, Message(".osi3.LidarSensorView")),
                    rep("camera_sensor_view", 1003, Message(".osi3.CameraSensorView")),
                    rep(
                        "ultrasonic_sensor_view",
                        1004,
                        Message(".osi3.UltrasonicSensorView"),
                    ),
                ],
            ),
            message(
                "GenericSensorView",
                &[opt(
                    "view_configuration",
                    1,
                    Message(".osi3.GenericSensorViewConfiguration"),
                )],
            ),
            message(
                "RadarSensorView",
                &[
                    opt(
                        "view_configuration",
                        1,
                        Message(".osi3.RadarSensorViewConfiguration"),
                    ),
                    rep("reflection", 2, Message(".osi3.RadarSensorView.Reflection")),
                ],
            )
            .with_nested(&[message(
                "Reflection",
                &[
                    opt("signal_strength", 1, Double),
                    opt("time_of_flight", 2, Double),
                    opt("doppler_shift", 3, Double),
                    opt("source_horizontal_angle", 4, Double),
                    opt("source_vertical_angle", 5, Double),
                ],
            )]),
            message(
                "LidarSensorView",
                &[
                    opt(
                        "view_configuration",
                        1,
                        Message(".osi3.LidarSensorViewConfiguration"),
                    ),
                    rep("reflection", 2, Message(".osi3.LidarSensorView.Reflection")),
                ],
            )
            .with_nested(&[message(
                "Reflection",
                &[
                    opt("signal_strength", 1, Double),
                    opt("time_of_flight", 2, Double),
                    opt("doppler_shift", 3, Double),
                    opt("normal_to_surface", 4, VEC3),
                    opt("object_id", 5, ID),
                ],
            )]),
            message(
                "CameraSensorView",
                &[
                    opt(
                        "view_configuration",
                        1,
                        Message(".osi3.CameraSensorViewConfiguration"),
                    ),
                    opt("image_data", 2, Bytes),
                ],
            ),
            message(
                "UltrasonicSensorView",
                &[opt(
                    "view_configuration",
                    1,
                    Message(".osi3.UltrasonicSensorViewConfiguration"),
                )],
            ),
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_detectedobject.proto",
        deps: &["osi_common.proto", "osi_object.proto"],
        messages: &[
            MessageDef {
                enums: &[enumeration(
                    "MeasurementState",
                    &[
                        ("MEASUREMENT_STATE_UNKNOWN", 0),
                        ("MEASUREMENT_STATE_OTHER", 1),
                        ("MEASUREMENT_STATE_MEASURED", 2),
                        ("MEASUREMENT_STATE_PREDICTED", 3),
                    ],
                )],
                ..message(
                    "DetectedItemHeader",
                    &[
                        opt("tracking_id", 1, ID),
                        rep("ground_truth_id", 2, ID),
                        opt("existence_probability", 3, Double),
                        opt("age", 4, Double),
                        opt(
                            "measurement_state",
                            5,
                            Enum(".osi3.DetectedItemHeader.MeasurementState"),
                        ),
                        rep("sensor_id", 6, ID),
                    ],
                )
            },
            message(
                "DetectedStationaryObject",
                &[
                    opt("header", 1, ITEM_HEADER),
                    opt("base", 2, STATIONARY),
                    opt("base_rmse", 3, STATIONARY),
                    rep(
                        "candidate",
                        4,
                        Message(".osi3.DetectedStationaryObject.CandidateStationaryObject"),
                    ),
                ],
            )
            .with_nested(&[message(
                "CandidateStationaryObject",
                &[
                    opt("probability", 1, Double),
                    opt(
                        "classification",
                        2,
                        Message(".osi3.StationaryObject.Classification"),
                    ),
                ],
            )]),
            MessageDef {
                nested: &[message(
                    "CandidateMovingObject",
                    &[
                        opt("probability", 1, Double),
                        opt("type", 2, Enum(".osi3.MovingObject.Type")),
                        opt(
                            "vehicle_classification",
                            3,
                            Message(".osi3.MovingObject.VehicleClassification"),
                        ),
                        opt("head_pose", 4, ORIENTATION),
                        opt("upper_body_pose", 5, ORIENTATION),
                    ],
                )],
                enums: &[
                    enumeration(
                        "ReferencePoint",
                        &[
                            ("REFERENCE_POINT_UNKNOWN", 0),
                            ("REFERENCE_POINT_OTHER", 1),
                            ("REFERENCE_POINT_CENTER", 2),
                            ("REFERENCE_POINT_MIDDLE_LEFT", 3),
                            ("REFERENCE_POINT_MIDDLE_RIGHT", 4),
                            ("REFERENCE_POINT_REAR_MIDDLE", 5),
                            ("REFERENCE_POINT_REAR_LEFT", 6),
                            ("REFERENCE_POINT_REAR_RIGHT", 7),
                            ("REFERENCE_POINT_FRONT_MIDDLE", 8),
                            ("REFERENCE_POINT_FRONT_LEFT", 9),
                            ("REFERENCE_POINT_FRONT_RIGHT", 10),
                        ],
                    ),
                    enumeration(
                        "MovementState",
                        &[
                            ("MOVEMENT_STATE_UNKNOWN", 0),
                            ("MOVEMENT_STATE_OTHER", 1),
                            ("MOVEMENT_STATE_STATIONARY", 2),
                            ("MOVEMENT_STATE_STOPPED", 3),
                            ("MOVEMENT_STATE_MOVING", 4),
                        ],
                    ),
                ],
                ..message(
                    "DetectedMovingObject",
                    &[
                        opt("header", 1, ITEM_HEADER),
                        opt("base", 2, MOVING),
                        opt("base_rmse", 3, MOVING),
                        opt(
                            "reference_point",
                            4,
                            Enum(".osi3.DetectedMovingObject.ReferencePoint"),
                        ),
                        opt(
                            "movement_state",
                            5,
                            Enum(".osi3.DetectedMovingObject.MovementState"),
                        ),
                        opt("percentage_side_lane_left", 6, Double),
                        opt("percentage_side_lane_right", 7, Double),
                        rep(
                            "candidate",
                            8,
                            Message(".osi3.DetectedMovingObject.CandidateMovingObject"),
                        ),
                    ],
                )
            },
        ],
        enums: &[],
    },
    FileDef {
        name: "osi_detectedtrafficsign.proto",
        deps: &["osi_common.proto", "osi_trafficsign.proto", "osi_detectedobject.proto"],
        messages: &[message(
            "DetectedTrafficSign",
            &[
                opt("header", 1, ITEM_HEADER),
                opt("main_sign", 2, Message(".osi3.DetectedTrafficSign.DetectedMainSign")),
                rep(
                    "supplementary_sign",
                    3,
                    Message(".osi3.DetectedTrafficSign.DetectedSupplementarySign"),
                ),
            ],
        )
        .with_nested(&[
            message(
                "DetectedMainSign",
                &[
                    rep(
                        "candidate",
                        1,
                        Message(".osi3.DetectedTrafficSign.DetectedMainSign.CandidateMainSign"),
                    ),
                    opt("base", 2, STATIONARY),
                    opt("base_rmse", 3, STATIONARY),
                ],
            )
            .with_nested(&[message(
                "CandidateMainSign",
                &[
                    opt("probability", 1, Double),
                    opt(
                        "classification",
                        2,
                        Message(".osi3.TrafficSign.MainSign.Classification"),
                    ),
                ],
            )]),
            message(
                "DetectedSupplementarySign",
                &[
                    rep(
                        "candidate",
                        1,
                        Message(
                            ".osi3.DetectedTrafficSign.DetectedSupplementarySign.CandidateSupplementarySign",
                        ),
                    ),
                    opt("base", 2, STATIONARY),
                    opt("base_rmse", 3, STATIONARY),
                ],
            )
            .with_nested(&[message(
                "CandidateSupplementarySign",
                &[
                    opt("probability", 1, Double),
                    opt(
                        "classification",
                        2,
                        Message(".osi3.TrafficSign.SupplementarySign.Classification"),
                    ),
                ],
            )]),
        ])],
        enums: &[],
    },
    FileDef {
        name: "osi_detectedtrafficlight.proto",
        deps: &["osi_common.proto", "osi_trafficlight.proto", "osi_detectedobject.proto"],
        messages: &[message(
            "DetectedTrafficLight",
            &[
                opt("header", 1, ITEM_HEADER),
                opt("base", 2, STATIONARY),
                opt("base_rmse", 3, STATIONARY),
                rep(
                    "candidate",
                    4,
                    Message(".osi3.DetectedTrafficLight.CandidateTrafficLight"),
                ),
            ],
        )
        .with_nested(&[message(
            "CandidateTrafficLight",
            &[
                opt("probability", 1, Double),
                opt("classification", 2, Message(".osi3.TrafficLight.Classification")),
            ],
        )])],
        enums: &[],
    },
    FileDef {
        name: "osi_detectedroadmarking.proto",
        deps: &["osi_common.proto", "osi_roadmarking.proto", "osi_detectedobject.proto"],
        messages: &[message(
            "DetectedRoadMarking",
            &[
                opt("header", 1, ITEM_HEADER),
                opt("base", 2, STATIONARY),
                opt("base_rmse", 3, STATIONARY),
                rep(
                    "candidate",
                    4,
                    Message(".osi3.DetectedRoadMarking.CandidateRoadMarking"),
                ),
            ],
        )
        .with_nested(&[message(
            "CandidateRoadMarking",
            &[
                opt("probability", 1, Double),
                opt("classification", 2, Message(".osi3.RoadMarking.Classification")),
            ],
        )])],
        enums: &[],
    },
    FileDef {
        name: "osi_detectedlane.proto",
        deps: &["osi_common.proto", "osi_lane.proto", "osi_detectedobject.proto"],
        messages: &[message(
            "DetectedLaneBoundary",
            &[
                opt("header", 1, ITEM_HEADER),
                rep(
                    "candidate",
                    2,
                    Message(".osi3.DetectedLaneBoundary.CandidateLaneBoundary"),
                ),
                rep("boundary_line", 3, Message(".osi3.LaneBoundary.BoundaryPoint")),
                rep("boundary_line_rmse", 4, Message(".osi3.LaneBoundary.BoundaryPoint")),
                rep("boundary_line_confidences", 5, Double),
            ],
        )
        .with_nested(&[message(
            "CandidateLaneBoundary",
            &[
                opt("probability", 1, Double),
                opt("classification", 2, Message(".osi3.LaneBoundary.Classification")),
            ],
        )])],
        enums: &[],
    },
    FileDef {
        name: "osi_featuredata.proto",
        deps: &["osi_version.proto", "osi_common.proto"],
        messages: &[
            MessageDef {
                enums: &[enumeration(
                    "DataQualifier",
                    &[
                        ("DATA_QUALIFIER_UNKNOWN", 0),
                        ("DATA_QUALIFIER_OTHER", 1),
                        ("DATA_QUALIFIER_AVAILABLE", 2),
                        ("DATA_QUALIFIER_AVAILABLE_REDUCED", 3),
                        ("DATA_QUALIFIER_NOT_AVAILABLE", 4),
                        ("DATA_QUALIFIER_BLINDNESS", 5),
                        ("DATA_QUALIFIER_TEMPORARY_AVAILABLE", 6),
                    ],
                )],
                ..message(
                    "SensorDetectionHeader",
                    &[
                        opt("measurement_time", 1, TIMESTAMP),
                        opt("cycle_counter", 2, Uint64),
                        opt("mounting_position", 3, MOUNTING),
                        opt("mounting_position_rmse", 4, MOUNTING),
                        opt(
                            "data_qualifier",
                            5,
                            Enum(".osi3.SensorDetectionHeader.DataQualifier"),
                        ),
                        opt("number_of_valid_detections", 6, Uint32),
                        opt("sensor_id", 7, ID),
                    ],
                )
            },
            message(
                "FeatureData",
                &[
                    opt("version", 1, VERSION),
                    rep("radar_sensor", 2, Message(".osi3.RadarDetectionData")),
                    rep("lidar_sensor", 3, Message(".osi3.LidarDetectionData")),
                    rep("ultrasonic_sensor", 4, Message(".osi3.UltrasonicDetectionData")),
                    rep("camera_sensor", 5, Message(".osi3.CameraDetectionData")),
                ],
            ),
            message(
                "RadarDetectionData",
                &[
                    opt("header", 1, DETECTION_HEADER),
                    rep("detection", 2, Message(".osi3.RadarDetection")),
                ],
            ),
            message(
                "RadarDetection",
                &[
                    opt("existence_probability", 1, Double),
                    opt("object_id", 2, ID),
                    opt("position", 3, SPHERICAL),
                    opt("position_rmse", 4, SPHERICAL),
                    opt("radial_velocity", 5, Double),
                    opt("radial_velocity_rmse", 6, Double),
                    opt("rcs", 7, Double),
                    opt("snr", 8, Double),
                    opt("point_target_probability", 9, Double),
                    opt("ambiguity_id", 10, ID),
                    opt("classification", 11, Enum(".osi3.DetectionClassification")),
                ],
            ),
            message(
                "LidarDetectionData",
                &[
                    opt("header", 1, DETECTION_HEADER),
                    rep("detection", 2, Message(".osi3.LidarDetection")),
                ],
            ),
            message(
                "LidarDetection",
                &[
                    opt("existence_probability", 1, Double),
                    opt("object_id", 2, ID),
                    opt("position", 3, SPHERICAL),
                    opt("position_rmse", 4, SPHERICAL),
                    opt("height", 5, Double),
                    opt("height_rmse", 6, Double),
                    opt("intensity", 7, Double),
                    opt("free_space_probability", 8, Double),
                    opt("classification", 9, Enum(".osi3.DetectionClassification")),
                    opt("reflectivity", 10, Double),
                    opt("echo_pulse_width", 11, Double),
                    opt("radial_velocity", 12, Double),
                    opt("beam_id", 13, ID),
                ],
            ),
            message("UltrasonicDetectionData", &[opt("header", 1, DETECTION_HEADER)]),
            message("CameraDetectionData", &[opt("header", 1, DETECTION_HEADER)]),
        ],
        enums: &[enumeration(
            "DetectionClassification",
            &[
                ("DETECTION_CLASSIFICATION_UNKNOWN", 0),
                ("DETECTION_CLASSIFICATION_OTHER", 1),
                ("DETECTION_CLASSIFICATION_INVALID", 2),
                ("DETECTION_CLASSIFICATION_CLUTTER", 3),
                ("DETECTION_CLASSIFICATION_OVERDRIVABLE", 4),
                ("DETECTION_CLASSIFICATION_UNDERDRIVABLE", 5),
            ],
        )],
    },
    FileDef {
        name: "osi_logicaldetectiondata.proto",
        deps: &["osi_version.proto", "osi_common.proto"],
        messages: &[
            message(
                "LogicalDetectionData",
                &[
                    opt("version", 1, VERSION),
                    opt("header", 2, Message(".osi3.LogicalDetectionDataHeader")),
                    rep("logical_detection", 3, Message(".osi3.LogicalDetection")),
                ],
            ),
            MessageDef {
                enums: &[enumeration(
                    "DataQualifier",
                    &[
                        ("DATA_QUALIFIER_UNKNOWN", 0),
                        ("DATA_QUALIFIER_OTHER", 1),
                        ("DATA_QUALIFIER_AVAILABLE", 2),
                        ("DATA_QUALIFIER_AVAILABLE_REDUCED", 3),
                        ("DATA_QUALIFIER_NOT_AVAILABLE", 4),
                        ("DATA_QUALIFIER_BLINDNESS", 5),
                        ("DATA_QUALIFIER_TEMPORARY_AVAILABLE", 6),
                        ("DATA_QUALIFIER_INVALID", 7),
                    ],
                )],
                ..message(
                    "LogicalDetectionDataHeader",
                    &[
                        opt("logical_detection_time", 1, TIMESTAMP),
                        opt(
                            "data_qualifier",
                            2,
                            Enum(".osi3.LogicalDetectionDataHeader.DataQualifier"),
                        ),
                        opt("number_of_valid_logical_detections", 3, Uint32),
                        rep("sensor_id", 4, ID),
                    ],
                )
            },
            message(
                "LogicalDetection",
                &[
                    opt("existence_probability", 1, Double),
                    opt("object_id", 2, ID),
                    opt("position", 3, VEC3),
                    opt("position_rmse", 4, VEC3),
                    opt("velocity", 5, VEC3),
                    opt("velocity_rmse", 6, VEC3),
                    opt("intensity", 7, Double),
                    opt("snr", 8, Double),
                    opt("point_target_probability", 9, Double),
                    rep("sensor_id", 10, ID),
                    opt(
                        "classification",
                        11,
                        Enum(".osi3.LogicalDetectionClassification"),
                    ),
                    opt("echo_pulse_width", 12, Double),
                ],
            ),
        ],
        enums: &[enumeration(
            "LogicalDetectionClassification",
            &[
                ("LOGICAL_DETECTION_CLASSIFICATION_UNKNOWN", 0),
                ("LOGICAL_DETECTION_CLASSIFICATION_OTHER", 1),
                ("LOGICAL_DETECTION_CLASSIFICATION_INVALID", 2),
                ("LOGICAL_DETECTION_CLASSIFICATION_CLUTTER", 3),
                ("LOGICAL_DETECTION_CLASSIFICATION_OVERDRIVABLE", 4),
                ("LOGICAL_DETECTION_CLASSIFICATION_UNDERDRIVABLE", 5),
            ],
        )],
    },
    FileDef {
        name: "osi_sensordata.proto",
        deps: &[
            "osi_version.proto",
            "osi_common.proto",
            "osi_sensorview.proto",
            "osi_featuredata.proto",
            "osi_logicaldetectiondata.proto",
            "osi_detectedobject.proto",
            "osi_detectedtrafficsign.proto",
            "osi_detectedtrafficlight.proto",
            "osi_detectedroadmarking.proto",
            "osi_detectedlane.proto",
        ],
        messages: &[
            MessageDef {
                enums: &[enumeration(
                    "DataQualifier",
                    &[
                        ("DATA_QUALIFIER_UNKNOWN", 0),
                        ("DATA_QUALIFIER_OTHER", 1),
                        ("DATA_QUALIFIER_AVAILABLE", 2),
                        ("DATA_QUALIFIER_AVAILABLE_REDUCED", 3),
                        ("DATA_QUALIFIER_NOT_AVAILABLE", 4),
                        ("DATA_QUALIFIER_BLINDNESS", 5),
                        ("DATA_QUALIFIER_TEMPORARY_AVAILABLE", 6),
                        ("DATA_QUALIFIER_INVALID", 7),
                    ],
                )],
                ..message(
                    "DetectedEntityHeader",
                    &[
                        opt("measurement_time", 1, TIMESTAMP),
                        opt("cycle_counter", 2, Uint64),
                        opt(
                            "data_qualifier",
                            3,
                            Enum(".osi3.DetectedEntityHeader.DataQualifier"),
                        ),
                    ],
                )
            },
            message(
                "SensorData",
                &[
                    opt("version", 1, VERSION),
                    opt("timestamp", 2, TIMESTAMP),
                    opt("sensor_id", 3, ID),
                    opt("mounting_position", 4, MOUNTING),
                    opt("mounting_position_rmse", 5, MOUNTING),
                    opt("host_vehicle_location", 6, MOVING),
                    opt("host_vehicle_location_rmse", 7, MOVING),
                    opt("last_measurement_time", 8, TIMESTAMP),
                    rep("sensor_view", 9, Message(".osi3.SensorView")),
                    opt("stationary_object_header", 10, ENTITY_HEADER),
                    rep(
                        "stationary_object",
                        11,
                        Message(".osi3.DetectedStationaryObject"),
                    ),
                    opt("moving_object_header", 12, ENTITY_HEADER),
                    rep("moving_object", 13, Message(".osi3.DetectedMovingObject")),
                    opt("traffic_sign_header", 14, ENTITY_HEADER),
                    rep("traffic_sign", 15, Message(".osi3.DetectedTrafficSign")),
                    opt("traffic_light_header", 16, ENTITY_HEADER),
                    rep("traffic_light", 17, Message(".osi3.DetectedTrafficLight")),
                    opt("road_marking_header", 18, ENTITY_HEADER),
                    rep("road_marking", 19, Message(".osi3.DetectedRoadMarking")),
                    opt("lane_boundary_header", 20, ENTITY_HEADER),
                    rep("lane_boundary", 21, Message(".osi3.DetectedLaneBoundary")),
                    opt("feature_data", 24, Message(".osi3.FeatureData")),
                    opt(
                        "logical_detection_data",
                        25,
                        Message(".osi3.LogicalDetectionData"),
                    ),
                ],
            ),
        ],
        enums: &[],
    },
];

const LIGHT_INDICATOR: &str = ".osi3.MovingObject.VehicleClassification.LightState.IndicatorState";
const LIGHT_GENERIC: &str = ".osi3.MovingObject.VehicleClassification.LightState.GenericLightState";
const LIGHT_BRAKE: &str = ".osi3.MovingObject.VehicleClassification.LightState.BrakeLightState";
const MAIN_SIGN_TYPE: &str = ".osi3.TrafficSign.MainSign.Classification.Type";
const DETECTION_HEADER: Ty = Message(".osi3.SensorDetectionHeader");
const ENTITY_HEADER: Ty = Message(".osi3.DetectedEntityHeader");

const VIEW_CONFIGURATION: &[super::def::FieldDef] = &[
    opt("sensor_id", 1, ID),
    opt("mounting_position", 2, MOUNTING),
    opt("mounting_position_rmse", 3, MOUNTING),
    opt("field_of_view_horizontal", 4, Double),
    opt("field_of_view_vertical", 5, Double),
];
