//! Discrete coil coordinate tables
//!
//! One row per sensor: (name, description, r, z, angle). Coordinates come
//! from the magnetics installation survey and are opaque to the schema
//! machinery. Table order is registration order is serialization order.

/// (name, description, r, z, angle)
pub(crate) type DiscreteCoilRow = (&'static str, &'static str, f32, f32, f32);

/// 55.A5 saddle sensor coils
pub(crate) const A5_COILS: &[DiscreteCoilRow] = &[
    ("M2001", "55.A5.00-MSS-2001", 3.2324, -2.81374, -90.0),
    ("M2002", "55.A5.00-MSS-2002", 3.2324, -1.34174, -90.0),
    ("M2003", "55.A5.00-MSS-2003", 3.2324, 0.13026, -90.0),
    ("M2004", "55.A5.00-MSS-2004", 3.2324, 1.60227, -90.0),
    ("M2005", "55.A5.00-MSS-2005", 3.2324, 3.07427, -90.0),
    ("M2006", "55.A5.00-MSS-2006", 3.38561, 4.52545, -113.0),
    ("M2007", "55.A5.00-MSS-2007", 4.40885, 5.53135, -158.0),
    ("M2008", "55.A5.00-MSS-2008", 5.85509, 5.62154, 166.0),
    ("M2009", "55.A5.00-MSS-2009", 7.17685, 4.98893, 146.0),
    ("M2010", "55.A5.00-MSS-2010", 8.28484, 4.02611, 132.0),
    ("M2011", "55.A5.00-MSS-2011", 9.11275, 2.81391, 117.0),
    ("M2012", "55.A5.00-MSS-2012", 9.60652, 1.43147, 102.0),
    ("M2013", "55.A5.00-MSS-2013", 9.67333, -0.03036, 82.0),
    ("M2014", "55.A5.00-MSS-2014", 9.20677, -1.42026, 66.0),
    ("M2015", "55.A5.00-MSS-2015", 8.61264, -2.76702, 66.0),
    ("M2016", "55.A5.00-MSS-2016", 8.00968, -4.08002, 60.0),
    ("M2017", "55.A5.00-MSS-2017", 7.00327, -5.13642, 33.0),
    ("M2018", "55.A5.00-MSS-2018", 5.63329, -5.63799, 7.0),
    ("M2019", "55.A5.00-MSS-2019", 4.2076, -5.40294, -30.0),
    ("M2020", "55.A5.00-MSS-2020", 3.3143, -4.27775, -73.0),
    ("M5001", "55.A5.00-MSS-5001", 3.23239, -2.32307, -90.0),
    ("M5002", "55.A5.00-MSS-5002", 3.23239, -0.85107, -90.0),
    ("M5003", "55.A5.00-MSS-5003", 3.23239, 0.62093, -90.0),
    ("M5004", "55.A5.00-MSS-5004", 3.23239, 2.09294, -90.0),
    ("M5005", "55.A5.00-MSS-5005", 3.23239, 3.56494, -90.0),
    ("M5006", "55.A5.00-MSS-5006", 3.63493, 4.94638, -128.0),
    ("M5007", "55.A5.00-MSS-5007", 4.88115, 5.65969, -171.0),
    ("M5008", "55.A5.00-MSS-5008", 6.3177, 5.46044, 156.0),
    ("M5009", "55.A5.00-MSS-5009", 7.57316, 4.69996, 141.0),
    ("M5010", "55.A5.00-MSS-5010", 8.59503, 3.64613, 127.0),
    ("M5011", "55.A5.00-MSS-5011", 9.31654, 2.36773, 112.0),
    ("M5012", "55.A5.00-MSS-5012", 9.68937, 0.94805, 97.0),
    ("M5013", "55.A5.00-MSS-5013", 9.56985, -0.50963, 74.0),
    ("M5014", "55.A5.00-MSS-5014", 9.00873, -1.86918, 66.0),
    ("M5015", "55.A5.00-MSS-5015", 8.41461, -3.21594, 66.0),
    ("M5016", "55.A5.00-MSS-5016", 7.72957, -4.48227, 51.0),
    ("M5017", "55.A5.00-MSS-5017", 6.57405, -5.37306, 24.0),
    ("M5018", "55.A5.00-MSS-5018", 5.14371, -5.66011, -2.0),
    ("M5019", "55.A5.00-MSS-5019", 3.81721, -5.10809, -44.0),
    ("M5020", "55.A5.00-MSS-5020", 3.23385, -3.79506, -88.0),
    ("M8001", "55.A5.00-MSS-8001", 3.2324, -3.30441, -90.0),
    ("M8002", "55.A5.00-MSS-8002", 3.2324, -1.83241, -90.0),
    ("M8003", "55.A5.00-MSS-8003", 3.2324, -0.3604, -90.0),
    ("M8004", "55.A5.00-MSS-8004", 3.2324, 1.1116, -90.0),
    ("M8005", "55.A5.00-MSS-8005", 3.2324, 2.5836, -90.0),
    ("M8006", "55.A5.00-MSS-8006", 3.2525, 4.05463, -98.0),
    ("M8007", "55.A5.00-MSS-8007", 3.98379, 5.28931, -143.0),
    ("M8008", "55.A5.00-MSS-8008", 5.37001, 5.68909, 178.0),
    ("M8009", "55.A5.00-MSS-8009", 6.75734, 5.24304, 151.0),
    ("M8010", "55.A5.00-MSS-8010", 7.9434, 4.37824, 137.0),
    ("M8011", "55.A5.00-MSS-8011", 8.87166, 3.24108, 122.0),
    ("M8012", "55.A5.00-MSS-8012", 9.48153, 1.90579, 107.0),
    ("M8013", "55.A5.00-MSS-8013", 9.7134, 0.45832, 89.0),
    ("M8014", "55.A5.00-MSS-8014", 9.40473, -0.97131, 67.0),
    ("M8015", "55.A5.00-MSS-8015", 8.81069, -2.3181, 66.0),
    ("M8016", "55.A5.00-MSS-8016", 8.21657, -3.66485, 66.0),
    ("M8017", "55.A5.00-MSS-8017", 7.39147, -4.83717, 42.0),
    ("M8018", "55.A5.00-MSS-8018", 6.11381, -5.54156, 16.0),
    ("M8019", "55.A5.00-MSS-8019", 4.65935, -5.59073, -15.0),
    ("M8020", "55.A5.00-MSS-8020", 3.51298, -4.72491, -59.0),
];

/// 55.A9 low-frequency sensor coils
pub(crate) const A9_COILS: &[DiscreteCoilRow] = &[
    ("M1101", "55.A9.00-MLF-1101", 8.5504, -2.92489, 0.0),
    ("M1102", "55.A9.00-MLF-1102", 8.55036, -2.92489, 0.0),
    ("M1103", "55.A9.00-MLF-1103", 8.55038, -2.92489, 0.0),
    ("M1104", "55.A9.00-MLF-1104", 8.54862, -2.92489, 0.0),
    ("M1105", "55.A9.00-MLF-1105", 8.54862, -2.92489, 0.0),
    ("M1106", "55.A9.00-MLF-1106", 8.55039, -2.92489, 0.0),
    ("M1107", "55.A9.00-MLF-1107", 8.55036, -2.92489, 0.0),
    ("M1108", "55.A9.00-MLF-1108", 8.5504, -2.92489, 0.0),
    ("M1109", "55.A9.00-MLF-1109", 8.23798, -3.62585, 0.0),
    ("M1110", "55.A9.00-MLF-1110", 8.23653, -3.62585, 0.0),
    ("M1111", "55.A9.00-MLF-1111", 8.23653, -3.62585, 0.0),
    ("M1112", "55.A9.00-MLF-1112", 8.23798, -3.62585, 0.0),
    ("M4101", "55.A9.00-MLF-4101", 8.5504, -2.92489, 0.0),
    ("M4102", "55.A9.00-MLF-4102", 8.55036, -2.92489, 0.0),
    ("M4103", "55.A9.00-MLF-4103", 8.55039, -2.92489, 0.0),
    ("M4104", "55.A9.00-MLF-4104", 8.54862, -2.92489, 0.0),
    ("M4105", "55.A9.00-MLF-4105", 8.54862, -2.92489, 0.0),
    ("M4106", "55.A9.00-MLF-4106", 8.55038, -2.92489, 0.0),
    ("M4107", "55.A9.00-MLF-4107", 8.55036, -2.92489, 0.0),
    ("M4108", "55.A9.00-MLF-4108", 8.5504, -2.92489, 0.0),
    ("M4109", "55.A9.00-MLF-4109", 8.23798, -3.62585, 0.0),
    ("M4110", "55.A9.00-MLF-4110", 8.23653, -3.62585, 0.0),
    ("M4111", "55.A9.00-MLF-4111", 8.23653, -3.62585, 0.0),
    ("M4112", "55.A9.00-MLF-4112", 8.23798, -3.62585, 0.0),
    ("M7101", "55.A9.00-MLF-7101", 8.55039, -2.92489, 0.0),
    ("M7102", "55.A9.00-MLF-7102", 8.55036, -2.92489, 0.0),
    ("M7103", "55.A9.00-MLF-7103", 8.55039, -2.92489, 0.0),
    ("M7104", "55.A9.00-MLF-7104", 8.54861, -2.92489, 0.0),
    ("M7105", "55.A9.00-MLF-7105", 8.54861, -2.92489, 0.0),
    ("M7106", "55.A9.00-MLF-7106", 8.55039, -2.92489, 0.0),
    ("M7107", "55.A9.00-MLF-7107", 8.55036, -2.92489, 0.0),
    ("M7108", "55.A9.00-MLF-7108", 8.55039, -2.92489, 0.0),
    ("M7109", "55.A9.00-MLF-7109", 8.23797, -3.62585, 0.0),
    ("M7110", "55.A9.00-MLF-7110", 8.23653, -3.62585, 0.0),
    ("M7111", "55.A9.00-MLF-7111", 8.23653, -3.62585, 0.0),
    ("M7112", "55.A9.00-MLF-7112", 8.23797, -3.62585, 0.0),
];

/// 55.AL divertor sensor coils
pub(crate) const AL_COILS: &[DiscreteCoilRow] = &[
    ("M1001", "55.AL.00-MLF-1001", 5.87282, -3.88933, 135.0),
    ("M1002", "55.AL.00-MLF-1002", 5.87282, -3.92313, -135.0),
    ("M1003", "55.AL.00-MLF-1003", 5.87282, -4.11463, 135.0),
    ("M1004", "55.AL.00-MLF-1004", 5.87282, -4.14844, -135.0),
    ("M1005", "55.AL.00-MLF-1005", 5.12547, -4.23675, -60.0),
    ("M1006", "55.AL.00-MLF-1006", 5.09543, -4.18472, 30.0),
    ("M1007", "55.AL.00-MLF-1007", 4.8932, -3.97336, -22.0),
    ("M1008", "55.AL.00-MLF-1008", 4.8373, -3.95134, 69.0),
    ("M1009", "55.AL.00-MLF-1009", 4.63185, -3.96449, 30.0),
    ("M1010", "55.AL.00-MLF-1010", 4.57982, -3.99453, 120.0),
    ("M1011", "55.AL.00-MLF-1011", 4.1091, -3.30179, -73.0),
    ("M1012", "55.AL.00-MLF-1012", 4.12474, -3.2718, 17.0),
];
