//! VSOP87A terms for Neptune: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 127 terms, truncated offline (see `vsop87_truncate`).

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (30.05890004476, 5.31211340029, 38.1330356378),
    (0.27080164222, 3.141592653589793, 0.0),
    (0.13505661755, 3.50078975634, 76.2660712756),
    (0.15726094556, 0.11319072675, 36.6485629295),
    (0.14935120126, 1.08499403018, 39.6175083461),
    (0.02597313814, 1.99590301412, 1.4844727083),
    (0.01074040708, 5.38502938672, 74.7815985673),
    (0.00823793287, 1.43221581862, 35.1640902212),
    (0.00817588813, 0.78180174031, 2.9689454166),
    (0.00565534918, 5.98964907613, 41.1019810544),
    (0.00495719107, 0.59948143567, 529.6909650946),
    (0.00307525907, 0.40023311011, 73.297125859),
    (0.00272253551, 0.87443494387, 213.299095438),
    (0.00135887219, 5.54676577816, 77.7505439839),
    (0.00090965704, 1.68910246115, 114.3991069134),
    (0.00069040539, 5.8346912352, 4.4534181249),
    (0.00060813556, 2.6258995838, 33.6796175129),
    (0.00054690827, 1.55799996661, 71.8126531507),
    (0.0002888926, 4.78966826027, 42.5864537627),
    (0.00012614732, 3.57002516434, 112.9146342051),
    (0.00012749153, 2.73719269645, 111.4301614968),
    (0.00012013994, 0.94912933496, 1059.3819301892),
    (7.54065e-05, 2.77783477855, 70.3281804424),
    (7.573383e-05, 0.10011329853, 426.598190876),
    (8.004318e-05, 1.6396562626, 108.4612160802),
    (6.464842e-05, 4.62580066013, 5.9378908332),
];
pub(super) const X1: &[Term] = &[
    (0.00255840261, 2.01935686795, 36.6485629295),
    (0.00243125299, 5.46214902873, 39.6175083461),
    (0.00118398168, 2.88251845061, 76.2660712756),
    (0.00037965449, 3.141592653589793, 0.0),
    (0.00021924705, 3.20156164152, 35.1640902212),
    (0.00017459808, 4.26349398817, 41.1019810544),
    (0.00013130617, 5.36424961848, 2.9689454166),
    (5.086527e-05, 1.92377354729, 38.1330356378),
    (4.899718e-05, 2.09349497813, 73.297125859),
    (2.745267e-05, 4.06252818667, 77.7505439839),
    (2.204414e-05, 4.38855639521, 33.6796175129),
    (2.168719e-05, 4.11768012563, 4.4534181249),
    (1.572202e-05, 1.07606611589, 114.3991069134),
    (1.344022e-05, 3.03802059051, 42.5864537627),
    (1.285542e-05, 6.02367554997, 74.7815985673),
];
pub(super) const X2: &[Term] = &[
    (5.371138e-05, 0.0, 0.0),
    (4.536283e-05, 5.02700751836, 36.6485629295),
    (4.350766e-05, 2.45420254304, 39.6175083461),
    (3.092965e-05, 0.62250463031, 38.1330356378),
    (2.163703e-05, 1.79218168368, 76.2660712756),
    (3.90868e-06, 5.6764348398, 35.1640902212),
    (3.01339e-06, 1.8173725886, 41.1019810544),
    (2.04562e-06, 2.46637556893, 2.9689454166),
    (1.59748e-06, 1.25894343852, 206.1855484372),
];
pub(super) const X3: &[Term] = &[
    (1.92703e-06, 0.8384964768, 36.6485629295),
    (1.82218e-06, 0.36067577276, 39.6175083461),
    (1.8088e-06, 0.0, 0.0),
    (1.31073e-06, 3.72972175765, 38.1330356378),
    (8.5922e-07, 0.42809925886, 76.2660712756),
];
pub(super) const X4: &[Term] = &[];
pub(super) const X5: &[Term] = &[];

pub(super) const Y0: &[Term] = &[
    (30.06056351665, 3.74086294714, 38.1330356378),
    (0.30205857683, 3.141592653589793, 0.0),
    (0.13506391797, 1.92953034883, 76.2660712756),
    (0.15706589373, 4.82539970129, 36.6485629295),
    (0.14936165806, 5.79694900665, 39.6175083461),
    (0.02584250749, 0.42549700754, 1.4844727083),
    (0.01073739772, 3.81371728533, 74.7815985673),
    (0.00815187583, 5.49429775826, 2.9689454166),
    (0.00582199295, 6.19633718936, 35.1640902212),
    (0.00565576412, 4.41843009015, 41.1019810544),
    (0.00495581047, 5.31205825784, 529.6909650946),
    (0.00304525203, 5.11048113661, 73.297125859),
    (0.00272640298, 5.58603690785, 213.299095438),
    (0.00135897385, 3.97553750964, 77.7505439839),
    (0.00090970871, 0.11783619888, 114.3991069134),
    (0.00068790261, 4.26391997151, 4.4534181249),
    (0.00028893355, 3.21848975032, 42.5864537627),
    (0.00020081559, 1.19787916085, 33.6796175129),
    (0.00012613583, 1.99777332934, 112.9146342051),
    (0.00012828708, 1.16740053443, 111.4301614968),
    (0.00012012961, 5.66157563804, 1059.3819301892),
    (8.76858e-05, 3.2348715695, 108.4612160802),
    (7.581788e-05, 4.81169168396, 426.598190876),
    (6.439265e-05, 3.05453259951, 5.9378908332),
];
pub(super) const Y1: &[Term] = &[
    (0.00352947493, 3.141592653589793, 0.0),
    (0.00256125493, 0.44757496817, 36.6485629295),
    (0.00243147725, 3.89099798696, 39.6175083461),
    (0.00118427205, 1.31128027037, 76.2660712756),
    (0.00021936702, 1.63124087591, 35.1640902212),
    (0.00017462332, 2.69229902966, 41.1019810544),
    (0.0001299238, 3.79578633002, 2.9689454166),
    (4.945117e-05, 0.51727080684, 73.297125859),
    (2.745921e-05, 2.49178311082, 77.7505439839),
    (2.145481e-05, 2.54768447291, 4.4534181249),
    (1.572289e-05, 5.78853350711, 114.3991069134),
    (1.565725e-05, 2.89846266272, 33.6796175129),
    (1.458269e-05, 1.61835542699, 38.1330356378),
    (1.293459e-05, 4.45868061082, 74.7815985673),
    (1.343731e-05, 1.46712622109, 42.5864537627),
];
pub(super) const Y2: &[Term] = &[
    (4.539421e-05, 3.45613207922, 36.6485629295),
    (4.347956e-05, 0.88317230351, 39.6175083461),
    (3.595394e-05, 3.141592653589793, 0.0),
    (3.058647e-05, 5.31956613665, 38.1330356378),
    (2.163809e-05, 0.22086532214, 76.2660712756),
    (3.94632e-06, 4.10915465726, 35.1640902212),
    (3.01094e-06, 0.24659723217, 41.1019810544),
    (1.60365e-06, 5.99443081049, 206.1855484372),
    (1.86626e-06, 0.85138234128, 2.9689454166),
];
pub(super) const Y3: &[Term] = &[
    (1.92703e-06, 5.55088601013, 36.6485629295),
    (1.82218e-06, 5.07306416874, 39.6175083461),
    (1.76062e-06, 0.0, 0.0),
    (1.30731e-06, 2.18169161636, 38.1330356378),
    (8.5913e-07, 5.13938436433, 76.2660712756),
];
pub(super) const Y4: &[Term] = &[];
pub(super) const Y5: &[Term] = &[];

pub(super) const Z0: &[Term] = &[
    (0.92866054405, 1.44103930278, 38.1330356378),
    (0.01245978462, 0.0, 0.0),
    (0.00474333567, 2.52218774238, 36.6485629295),
    (0.00451987936, 3.50949720541, 39.6175083461),
    (0.00417558068, 5.91310695421, 76.2660712756),
    (0.00084104329, 4.38928900096, 1.4844727083),
    (0.00032704958, 1.52048692001, 74.7815985673),
    (0.00030873335, 3.29017611456, 35.1640902212),
    (0.00025812584, 3.19303128782, 2.9689454166),
    (0.00016865319, 2.13251104425, 41.1019810544),
    (0.00011789909, 3.60001877675, 213.299095438),
    (9.770125e-05, 2.80133971586, 73.297125859),
    (0.0001127968, 3.55816676334, 529.6909650946),
];
pub(super) const Z1: &[Term] = &[
    (0.00154885971, 2.14239039664, 38.1330356378),
    (7.783708e-05, 4.40146905905, 36.6485629295),
    (6.862414e-05, 1.6593016061, 39.6175083461),
    (9.464276e-05, 0.0, 0.0),
    (3.891873e-05, 5.46761139427, 76.2660712756),
];
pub(super) const Z2: &[Term] = &[
    (1.26484e-05, 1.91401498992, 38.1330356378),
];
pub(super) const Z3: &[Term] = &[];
pub(super) const Z4: &[Term] = &[];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
