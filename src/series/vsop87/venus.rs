//! VSOP87A terms for Venus: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 109 terms, truncated offline (see `vsop87_truncate`).

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (0.72211281391, 3.17575836361, 10213.285546211),
    (0.00486448018, 0.0, 0.0),
    (0.00244500474, 4.05566613861, 20426.571092422),
    (2.800281e-05, 0.33147492492, 2352.8661537718),
    (1.949669e-05, 4.23196016801, 1577.3435424478),
    (1.241717e-05, 4.93573787058, 30639.856638633),
    (1.162258e-05, 2.87958246189, 18073.7049386502),
    (1.04669e-05, 1.75434920413, 6283.0758499914),
    (7.64293e-06, 0.59379588767, 529.6909650946),
    (6.69461e-06, 1.45721228842, 14143.4952424306),
    (6.57195e-06, 0.50086450258, 8635.9420037632),
    (4.76445e-06, 5.8430978284, 10186.9872264112),
    (4.74466e-06, 3.64991163504, 10239.5838660108),
    (5.59074e-06, 1.16554783301, 22003.9146348698),
    (5.46778e-06, 2.71490884128, 11790.6290886588),
    (4.08988e-06, 3.92725431993, 775.522611324),
    (2.87059e-06, 2.79578956958, 9683.5945811164),
    (2.68822e-06, 0.42000307859, 10742.9765113056),
    (2.97742e-06, 5.65655811166, 5507.5532386674),
    (2.14149e-06, 0.74884072598, 10021.8372800994),
    (2.41103e-06, 5.80627627098, 10988.808157535),
    (2.09303e-06, 2.47129919435, 10404.7338123226),
    (2.71022e-06, 2.6237778032, 19896.8801273274),
    (2.5448e-06, 5.09961413241, 9153.9036160218),
    (1.74985e-06, 6.12704911391, 191.4482661116),
    (1.7504e-06, 3.5316397756, 9437.762934887),
    (1.54379e-06, 5.3560770439, 4705.7323075436),
    (1.47455e-06, 5.55780022641, 19651.048481098),
];
pub(super) const X1: &[Term] = &[
    (0.00033862636, 3.141592653589793, 0.0),
    (0.00017234992, 0.92721124604, 20426.571092422),
    (6.510416e-05, 2.19289889733, 10213.285546211),
    (1.75153e-06, 1.80662375856, 30639.856638633),
    (6.0308e-07, 4.92818504243, 8635.9420037632),
    (6.2875e-07, 2.09139376733, 10186.9872264112),
    (6.2673e-07, 1.11931770829, 10239.5838660108),
    (4.9288e-07, 4.57672399872, 11790.6290886588),
    (3.6778e-07, 2.06851242251, 775.522611324),
];
pub(super) const X2: &[Term] = &[
    (7.04794e-06, 5.09874399916, 20426.571092422),
    (6.24477e-06, 3.86836776757, 10213.285546211),
    (6.4901e-06, 3.141592653589793, 0.0),
    (1.1644e-07, 5.5098281499, 30639.856638633),
    (8.62e-08, 2.6998872302, 10186.9872264112),
    (8.59e-08, 0.50870967404, 10239.5838660108),
];
pub(super) const X3: &[Term] = &[
    (7.3606e-07, 0.0, 0.0),
    (1.9386e-07, 5.23038243202, 10213.285546211),
    (2.4718e-07, 3.25340548805, 20426.571092422),
];
pub(super) const X4: &[Term] = &[
    (9.46e-09, 0.3907634476, 10213.285546211),
    (5.46e-09, 3.141592653589793, 0.0),
];
pub(super) const X5: &[Term] = &[];

pub(super) const Y0: &[Term] = &[
    (0.72324820731, 1.60573808356, 10213.285546211),
    (0.00549506273, 3.141592653589793, 0.0),
    (0.0024488479, 2.48564954004, 20426.571092422),
    (2.789807e-05, 5.04214523606, 2352.8661537718),
    (1.933868e-05, 5.80597990261, 1577.3435424478),
    (1.243658e-05, 3.36573697344, 30639.856638633),
    (1.16448e-05, 1.30970620277, 18073.7049386502),
    (1.041872e-05, 0.18129136925, 6283.0758499914),
    (7.70549e-06, 5.30366680002, 529.6909650946),
    (6.70527e-06, 6.17032430376, 14143.4952424306),
    (6.57675e-06, 5.21360427049, 8635.9420037632),
    (4.77182e-06, 4.27309387857, 10186.9872264112),
    (4.7569e-06, 2.08026660779, 10239.5838660108),
    (5.59632e-06, 5.87842445808, 22003.9146348698),
    (5.42381e-06, 1.15040078193, 11790.6290886588),
    (3.67778e-06, 2.17623939625, 9437.762934887),
    (4.07052e-06, 2.35411923107, 775.522611324),
    (2.75646e-06, 1.23968348521, 9683.5945811164),
    (2.68898e-06, 5.13218653673, 10742.9765113056),
    (3.02219e-06, 0.94310085463, 5507.5532386674),
    (2.14465e-06, 5.46202116536, 10021.8372800994),
    (2.41591e-06, 4.23657289457, 10988.808157535),
    (2.07456e-06, 0.88354754907, 10404.7338123226),
    (2.74181e-06, 0.42777141449, 9153.9036160218),
    (2.71427e-06, 1.0537672066, 19896.8801273274),
    (1.75993e-06, 1.40721119359, 191.4482661116),
    (1.5408e-06, 3.78432893453, 4705.7323075436),
    (1.46618e-06, 3.98848869231, 19651.048481098),
];
pub(super) const Y1: &[Term] = &[
    (0.0003923143, 0.0, 0.0),
    (0.00017282326, 5.638247359, 20426.571092422),
    (5.968075e-05, 3.60854944086, 10213.285546211),
    (1.75529e-06, 0.23554665359, 30639.856638633),
    (6.0346e-07, 3.35752563808, 8635.9420037632),
    (6.3046e-07, 0.52083190822, 10186.9872264112),
    (6.2777e-07, 5.83131036994, 10239.5838660108),
    (4.9333e-07, 3.00159177408, 11790.6290886588),
    (3.6923e-07, 0.5025560113, 775.522611324),
];
pub(super) const Y2: &[Term] = &[
    (2.007155e-05, 3.141592653589793, 0.0),
    (7.02052e-06, 3.52724964753, 20426.571092422),
    (2.65709e-06, 4.68091836985, 10213.285546211),
    (1.1646e-07, 3.93744761819, 30639.856638633),
    (8.639e-08, 1.1313582362, 10186.9872264112),
    (8.604e-08, 5.22297159997, 10239.5838660108),
];
pub(super) const Y3: &[Term] = &[
    (2.2966e-07, 0.38709241285, 10213.285546211),
    (2.486e-07, 1.68572825734, 20426.571092422),
    (3.743e-08, 3.141592653589793, 0.0),
];
pub(super) const Y4: &[Term] = &[
    (8.01e-09, 2.03074942043, 10213.285546211),
    (6.9e-09, 0.0, 0.0),
];
pub(super) const Y5: &[Term] = &[];

pub(super) const Z0: &[Term] = &[
    (0.04282990302, 0.26703856476, 10213.285546211),
    (0.00035588343, 3.141592653589793, 0.0),
    (0.00014501879, 1.1469691139, 20426.571092422),
    (1.40675e-06, 0.85984113219, 1577.3435424478),
];
pub(super) const Z1: &[Term] = &[
    (0.00208096402, 1.88967278742, 10213.285546211),
    (1.264989e-05, 3.71037501321, 20426.571092422),
    (1.364144e-05, 0.0, 0.0),
];
pub(super) const Z2: &[Term] = &[
    (9.148044e-05, 3.34791005272, 10213.285546211),
    (1.63977e-06, 0.0, 0.0),
    (1.3554e-07, 5.33914310904, 20426.571092422),
];
pub(super) const Z3: &[Term] = &[
    (2.72005e-06, 4.8764811614, 10213.285546211),
    (1.3656e-07, 3.141592653589793, 0.0),
];
pub(super) const Z4: &[Term] = &[
    (6.175e-08, 0.17121460361, 10213.285546211),
];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
