//! VSOP87A terms for Mercury: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 135 terms, truncated offline.

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (0.37546291728, 4.39651506942, 26087.9031415742),
    (0.03825746672, 1.16485604339, 52175.8062831484),
    (0.02625615963, 3.14159265359, 0.0),
    (0.00584261333, 4.21599394757, 78263.70942472259),
    (0.00105716695, 0.98379033182, 104351.61256629678),
    (0.0002101173, 4.03469353923, 130439.51570787099),
    (4.433373e-05, 0.80236674527, 156527.41884944518),
    (9.74967e-06, 3.85319674536, 182615.3219910194),
    (7.00327e-06, 4.45478725367, 24978.5245894808),
    (6.26468e-06, 1.18563492001, 27197.2816936676),
    (4.46989e-06, 2.97507181503, 1059.3819301892),
    (3.98401e-06, 1.86487895049, 20426.571092422),
    (2.77216e-06, 3.77909548342, 31749.2351907264),
    (1.90657e-06, 4.27201801941, 53285.1848352418),
    (1.8179e-06, 4.94857138217, 1109.3785520934),
    (1.94418e-06, 0.67806013045, 4551.9534970588),
    (2.21028e-06, 0.62082250658, 208703.2251325936),
    (1.90713e-06, 1.17385212686, 5661.3320491522),
    (1.38492e-06, 1.22446421973, 51066.427731055),
    (1.51693e-06, 2.67604566886, 51116.4243529592),
    (9.5481e-07, 0.16753795386, 529.6909650946),
    (1.14338e-06, 0.56002737806, 57837.1383323006),
    (7.5179e-07, 6.06954012703, 27147.28507176339),
    (7.4528e-07, 4.92454709213, 46514.4742339962),
    (8.3764e-07, 3.18666883018, 10213.285546211),
];
pub(super) const X1: &[Term] = &[
    (0.00318848034, 0.0, 0.0),
    (0.00105289019, 5.91600475006, 52175.8062831484),
    (0.00032316001, 2.68247273347, 78263.70942472259),
    (0.00011992889, 5.81575112963, 26087.9031415742),
    (8.7832e-05, 5.73285747425, 104351.61256629678),
    (2.329042e-05, 2.50023793407, 130439.51570787099),
    (6.14473e-06, 5.55087602844, 156527.41884944518),
    (1.62192e-06, 2.31836529248, 182615.3219910194),
    (6.9028e-07, 2.91494938058, 24978.5245894808),
    (6.2918e-07, 2.73196853262, 27197.2816936676),
    (4.2904e-07, 5.36906063918, 208703.2251325936),
];
pub(super) const X2: &[Term] = &[
    (1.484185e-05, 4.35401210269, 52175.8062831484),
    (9.07467e-06, 1.13216343018, 78263.70942472259),
    (1.214995e-05, 0.0, 0.0),
    (3.68809e-06, 4.18705944126, 104351.61256629678),
    (2.54306e-06, 4.1281737714, 26087.9031415742),
    (1.30149e-06, 0.95681684789, 130439.51570787099),
    (4.2868e-07, 4.00892196726, 156527.41884944518),
    (1.3566e-07, 0.77740665693, 182615.3219910194),
];
pub(super) const X3: &[Term] = &[
    (4.6252e-07, 3.14159265359, 0.0),
    (1.7461e-07, 5.90570575226, 78263.70942472259),
    (1.4855e-07, 2.98081270061, 52175.8062831484),
    (1.0499e-07, 2.65555597352, 104351.61256629678),
    (6.474e-08, 3.10442611992, 26087.9031415742),
    (4.906e-08, 5.70235297811, 130439.51570787099),
    (2.012e-08, 2.46917870918, 156527.41884944518),
];
pub(super) const X4: &[Term] = &[
    (3.96e-09, 3.14159265359, 0.0),
];
pub(super) const X5: &[Term] = &[];

pub(super) const Y0: &[Term] = &[
    (0.37953642888, 2.8378061782, 26087.9031415742),
    (0.11626131831, 3.14159265359, 0.0),
    (0.03854668215, 5.88780608966, 52175.8062831484),
    (0.00587711268, 2.65498896201, 78263.70942472259),
    (0.00106235493, 5.70550616735, 104351.61256629678),
    (0.00021100828, 2.47291315849, 130439.51570787099),
    (4.450056e-05, 5.52354907071, 156527.41884944518),
    (9.78286e-06, 2.29102643026, 182615.3219910194),
    (7.075e-06, 2.89516591531, 24978.5245894808),
    (6.54742e-06, 5.92892123881, 27197.2816936676),
    (4.48561e-06, 1.40595042211, 1059.3819301892),
    (4.02168e-06, 0.30317998006, 20426.571092422),
    (2.90604e-06, 2.23645868392, 31749.2351907264),
    (1.91358e-06, 2.70792842547, 53285.1848352418),
    (1.81119e-06, 0.23941291054, 1109.3785520934),
    (1.93372e-06, 5.38698781997, 4551.9534970588),
    (2.21718e-06, 5.3417067657, 208703.2251325936),
    (1.39514e-06, 5.94698662319, 51066.427731055),
    (1.54924e-06, 1.12201865761, 51116.4243529592),
    (1.77242e-06, 2.78855813429, 5661.3320491522),
    (1.16072e-06, 5.28608170116, 57837.1383323006),
    (8.1399e-07, 3.50862797958, 21535.9496445154),
    (8.6595e-07, 5.06999843254, 529.6909650946),
    (7.5457e-07, 4.50396814445, 27147.28507176339),
    (7.5078e-07, 3.36291170975, 46514.4742339962),
    (8.325e-07, 1.60127885818, 10213.285546211),
];
pub(super) const Y1: &[Term] = &[
    (0.00107803852, 4.34964793883, 52175.8062831484),
    (0.00080651544, 3.14159265359, 0.0),
    (0.00032715354, 1.11763734425, 78263.70942472259),
    (8.858158e-05, 4.16852401867, 104351.61256629678),
    (0.00011914709, 1.2213998634, 26087.9031415742),
    (2.344469e-05, 0.93615372641, 130439.51570787099),
    (6.17838e-06, 3.98693992284, 156527.41884944518),
    (1.62955e-06, 0.75452718043, 182615.3219910194),
    (7.0135e-07, 1.35447664024, 24978.5245894808),
    (6.3991e-07, 1.1800029407, 27197.2816936676),
    (4.3082e-07, 3.80528844384, 208703.2251325936),
];
pub(super) const Y2: &[Term] = &[
    (4.612157e-05, 0.0, 0.0),
    (1.57567e-05, 2.81172733349, 52175.8062831484),
    (9.27896e-06, 5.85368769122, 78263.70942472259),
    (6.70255e-06, 0.9096450909, 26087.9031415742),
    (3.73744e-06, 2.62279275699, 104351.61256629678),
    (1.31389e-06, 5.67519052208, 130439.51570787099),
    (4.3188e-07, 2.4440263183, 156527.41884944518),
    (1.365e-07, 5.49573569359, 182615.3219910194),
];
pub(super) const Y3: &[Term] = &[
    (1.8231e-07, 4.35141183918, 78263.70942472259),
    (1.784e-07, 1.4541906802, 52175.8062831484),
    (1.5722e-07, 0.0, 0.0),
    (1.0723e-07, 1.09353490107, 104351.61256629678),
    (8.835e-08, 4.62739214222, 26087.9031415742),
    (4.973e-08, 4.13805648872, 130439.51570787099),
    (2.032e-08, 0.90409186617, 156527.41884944518),
];
pub(super) const Y4: &[Term] = &[
    (4.48e-09, 3.14159265359, 0.0),
    (2.99e-09, 2.91725329579, 78263.70942472259),
];
pub(super) const Y5: &[Term] = &[];

pub(super) const Z0: &[Term] = &[
    (0.04607665326, 1.99295081967, 26087.9031415742),
    (0.00708734365, 3.14159265359, 0.0),
    (0.00469171617, 5.04215742764, 52175.8062831484),
    (0.00071626395, 1.80894256071, 78263.70942472259),
    (0.00012957446, 4.8592203201, 104351.61256629678),
    (2.575002e-05, 1.62646731545, 130439.51570787099),
    (5.43259e-06, 4.67698860167, 156527.41884944518),
    (1.19462e-06, 1.44437994097, 182615.3219910194),
    (7.9477e-07, 4.94442849343, 27197.2816936676),
    (8.2635e-07, 2.03127961938, 24978.5245894808),
];
pub(super) const Z1: &[Term] = &[
    (0.00108722177, 3.91134750825, 26087.9031415742),
    (0.00057826621, 3.14159265359, 0.0),
    (4.297352e-05, 2.56373047177, 52175.8062831484),
    (2.435833e-05, 0.05112640506, 78263.70942472259),
    (7.95699e-06, 3.20041081922, 104351.61256629678),
    (2.29251e-06, 0.0055843111, 130439.51570787099),
    (6.3404e-07, 3.07612843684, 156527.41884944518),
];
pub(super) const Z2: &[Term] = &[
    (1.053118e-05, 5.37979214357, 26087.9031415742),
    (1.185024e-05, 0.0, 0.0),
    (8.7113e-07, 0.4220693243, 52175.8062831484),
    (4.9534e-07, 4.38054039769, 78263.70942472259),
    (2.5685e-07, 1.45827443162, 104351.61256629678),
    (1.0457e-07, 4.62224691737, 130439.51570787099),
];
pub(super) const Z3: &[Term] = &[
    (2.1392e-07, 2.1280427846, 26087.9031415742),
    (1.7872e-07, 0.0, 0.0),
    (2.919e-08, 5.41085836184, 52175.8062831484),
    (1.164e-08, 2.43324966912, 78263.70942472259),
];
pub(super) const Z4: &[Term] = &[
    (5.87e-09, 4.86442699315, 26087.9031415742),
    (2.83e-09, 3.14159265359, 0.0),
];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
