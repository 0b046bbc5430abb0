//! The GTSRB sign catalog: class names, category assignments, and driving
//! guidance for the 43 classes of the German Traffic Sign Recognition
//! Benchmark.
//!
//! Class ids are the benchmark's own indices, so `ClassId(14)` is the stop
//! sign everywhere this dataset is used.  All lookups are total over the
//! valid range and return `None` outside it.

use tsr_core::{ClassId, SignCategory};

/// The 43 GTSRB class names, indexed by class id.
pub const GTSRB_CLASSES: [&str; 43] = [
    "Speed Limit 20",
    "Speed Limit 30",
    "Speed Limit 50",
    "Speed Limit 60",
    "Speed Limit 70",
    "Speed Limit 80",
    "End Speed 80",
    "Speed Limit 100",
    "Speed Limit 120",
    "No Passing",
    "No Passing Trucks",
    "Right-of-Way Intersection",
    "Priority Road",
    "Yield",
    "Stop",
    "No Vehicles",
    "No Trucks",
    "No Entry",
    "General Caution",
    "Curve Left",
    "Curve Right",
    "Double Curve",
    "Bumpy Road",
    "Slippery Road",
    "Narrow Right",
    "Road Work",
    "Traffic Signals",
    "Pedestrian Crossing",
    "Children Crossing",
    "Bicycle Crossing",
    "Ice/Snow",
    "Wild Animals",
    "End Restrictions",
    "Turn Right Ahead",
    "Turn Left Ahead",
    "Ahead Only",
    "Go Straight or Right",
    "Go Straight or Left",
    "Keep Right",
    "Keep Left",
    "Roundabout",
    "End No Passing",
    "End No Passing Trucks",
];

/// Name of a class, `None` outside the catalog.
pub fn class_name(class: ClassId) -> Option<&'static str> {
    GTSRB_CLASSES.get(class.index()).copied()
}

/// Resolve a class by its exact name.
pub fn class_named(name: &str) -> Option<ClassId> {
    GTSRB_CLASSES
        .iter()
        .position(|&n| n == name)
        .map(|i| ClassId(i as u8))
}

/// Category of a class, `None` outside the catalog.
///
/// The grouping is the benchmark taxonomy: note that Yield (13) and
/// Priority Road (12) sit under `Other` rather than under the warning
/// triangles.
pub fn category_of(class: ClassId) -> Option<SignCategory> {
    let category = match class.0 {
        0..=8 => SignCategory::Speed,
        9 | 10 => SignCategory::Prohibition,
        11..=13 => SignCategory::Other,
        14..=17 => SignCategory::Prohibition,
        18..=31 => SignCategory::Danger,
        32 => SignCategory::Other,
        33..=40 => SignCategory::Mandatory,
        41 | 42 => SignCategory::Other,
        _ => return None,
    };
    Some(category)
}

/// All class ids belonging to `category`, in ascending id order.
pub fn classes_in(category: SignCategory) -> Vec<ClassId> {
    (0..GTSRB_CLASSES.len() as u8)
        .map(ClassId)
        .filter(|&c| category_of(c) == Some(category))
        .collect()
}

/// Driving instruction for a class, `None` outside the catalog.
///
/// Phrased as a single clause with no trailing punctuation so alert
/// templates can splice it mid-sentence.
pub fn instruction_for(class: ClassId) -> Option<&'static str> {
    let text = match class.0 {
        0 => "Limit speed to 20 km/h",
        1 => "Limit speed to 30 km/h",
        2 => "Limit speed to 50 km/h",
        3 => "Limit speed to 60 km/h",
        4 => "Limit speed to 70 km/h",
        5 => "Limit speed to 80 km/h",
        6 => "End of 80 km/h zone, resume the standard limit",
        7 => "Limit speed to 100 km/h",
        8 => "Limit speed to 120 km/h",
        9 => "Do not overtake other vehicles",
        10 => "No overtaking for heavy vehicles",
        11 => "You have priority at the next intersection",
        12 => "You are on a priority road",
        13 => "Give way to crossing traffic",
        14 => "Come to a complete stop",
        15 => "Road closed to all vehicles",
        16 => "No entry for heavy vehicles",
        17 => "Do not enter this road",
        18 => "Proceed with increased attention",
        19 => "Slow down for the left curve ahead",
        20 => "Slow down for the right curve ahead",
        21 => "Winding road ahead, reduce speed",
        22 => "Reduce speed, uneven road surface ahead",
        23 => "Reduce speed, risk of skidding",
        24 => "Road narrows on the right",
        25 => "Slow down and watch for road workers",
        26 => "Traffic signals ahead, be ready to stop",
        27 => "Watch for pedestrians and be ready to stop",
        28 => "Slow down, children may cross",
        29 => "Watch for crossing cyclists",
        30 => "Reduce speed, icy conditions possible",
        31 => "Watch for animals crossing the road",
        32 => "All temporary restrictions have ended",
        33 => "Prepare to turn right",
        34 => "Prepare to turn left",
        35 => "Continue straight ahead",
        36 => "Continue straight or turn right",
        37 => "Continue straight or turn left",
        38 => "Keep to the right of the obstacle",
        39 => "Keep to the left of the obstacle",
        40 => "Yield to traffic in the roundabout",
        41 => "Overtaking is permitted again",
        42 => "Overtaking is permitted again for heavy vehicles",
        _ => return None,
    };
    Some(text)
}
