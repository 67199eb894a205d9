//! VSOP87A terms for Jupiter: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 360 terms, truncated offline.

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (5.19663470114, 0.59945082355, 529.6909650946),
    (0.3666264232, 3.14159265359, 0.0),
    (0.12593937922, 0.94911583701, 1059.3819301892),
    (0.01500672056, 0.7317513461, 522.5774180938),
    (0.01476224578, 3.61736921122, 536.8045120954),
    (0.00457752736, 1.29883700755, 1589.0728952838),
    (0.00301689798, 5.17372551148, 7.1135470008),
    (0.00385975375, 2.01229910687, 103.0927742186),
    (0.00194025405, 5.02580363996, 426.598190876),
    (0.00150678793, 6.12003027739, 110.2063212194),
    (0.00144867641, 5.5598057708, 632.7837393132),
    (0.00134226996, 0.87648567011, 213.299095438),
    (0.00103494641, 6.1932476912, 1052.2683831884),
    (0.00114201562, 0.01567084269, 1162.4747044078),
    (0.00072095575, 3.96117430643, 1066.49547719),
    (0.00059486083, 4.45769374358, 949.1756089698),
    (0.00068284021, 3.44051122631, 846.0828347512),
    (0.00047092251, 1.44612636451, 419.4846438752),
    (0.00030623417, 2.99132321427, 206.1855484372),
    (0.00026613459, 4.85169906494, 323.5054166574),
    (0.00019727457, 1.64891626213, 2118.7638603784),
    (0.00016481594, 1.95150056568, 316.3918696566),
    (0.00016101974, 0.8797315598, 515.463871093),
    (0.00014209487, 2.07769621413, 742.9900605326),
    (0.00015192516, 6.25820127906, 735.8765135318),
    (0.00011423199, 3.48146108929, 543.9180590962),
    (0.00012155285, 3.75229924999, 525.7588118315),
    (0.00011996271, 0.58568573729, 533.6231183577),
    (8.468556e-05, 3.47248751739, 639.897286314),
    (8.223302e-05, 5.56680447143, 1478.8665740644),
    (8.694124e-05, 0.38262009411, 1692.1656695024),
    (7.427517e-05, 5.98380751196, 956.2891559706),
    (7.51647e-05, 0.92896448412, 1265.5674786264),
    (7.655867e-05, 0.14178789086, 1581.959348283),
    (5.318791e-05, 1.10494016349, 526.5095713569),
    (5.218492e-05, 3.23235129224, 532.8723588323),
    (5.777311e-05, 5.03726165628, 14.2270940016),
    (4.622685e-05, 3.75817086099, 1375.7737998458),
    (3.939864e-05, 4.30892687511, 1596.1864422846),
    (4.569444e-05, 2.1508728171, 95.9792272178),
    (2.952712e-05, 3.85988483947, 309.2783226558),
    (2.857935e-05, 6.01118473739, 117.3198682202),
    (2.440094e-05, 4.23995765702, 433.7117378768),
    (2.438257e-05, 3.88808463822, 220.4126424388),
    (2.675112e-05, 3.18723449094, 1169.5882514086),
    (2.386425e-05, 5.96354994324, 1045.1548361876),
    (1.870097e-05, 0.52019313301, 1155.361157407),
    (1.93906e-05, 5.91883412864, 625.6701923124),
    (1.6315e-05, 4.41910383466, 942.062061969),
    (1.451667e-05, 5.7611270604, 853.196381752),
    (1.361286e-05, 1.34792748837, 1368.660252845),
    (1.663331e-05, 1.94010629194, 838.9692877504),
    (1.611229e-05, 5.49324974845, 74.7815985673),
    (1.03357e-05, 0.08907208789, 1795.258443721),
    (9.91481e-06, 3.08609505814, 1272.6810256272),
    (1.088284e-05, 1.1340610419, 527.2432845398),
    (1.080643e-05, 3.20528362573, 532.1386456494),
];
pub(super) const X1: &[Term] = &[
    (0.00882389251, 3.14159265359, 0.0),
    (0.00635297172, 0.10662156868, 1059.3819301892),
    (0.00599720482, 2.42996678275, 522.5774180938),
    (0.0058915706, 1.91556314637, 536.8045120954),
    (0.00081697204, 3.46668108797, 7.1135470008),
    (0.00046201898, 0.45714214032, 1589.0728952838),
    (0.0003250859, 1.74648849928, 1052.2683831884),
    (0.00033891193, 4.10113482752, 529.6909650946),
    (0.00031234303, 2.34698051502, 1066.49547719),
    (0.00021244363, 4.36576178953, 110.2063212194),
    (0.00018156701, 4.00572238779, 426.598190876),
    (0.00013577576, 0.30008010246, 632.7837393132),
    (0.00012889505, 2.57489294062, 515.463871093),
    (9.125875e-05, 1.78082469962, 543.9180590962),
    (8.085991e-05, 6.16136518902, 949.1756089698),
    (7.142547e-05, 3.17267801203, 323.5054166574),
    (4.29224e-05, 4.74970626655, 206.1855484372),
    (4.393977e-05, 1.14770788063, 735.8765135318),
    (3.399164e-05, 2.90091450747, 526.5095713569),
    (3.333344e-05, 1.43691652967, 532.8723588323),
    (3.873467e-05, 3.33648870101, 14.2270940016),
    (3.044408e-05, 1.65428048669, 525.7588118315),
    (3.001874e-05, 2.68376982746, 533.6231183577),
    (2.933359e-05, 2.61899855005, 419.4846438752),
    (2.438199e-05, 3.60655644537, 316.3918696566),
    (2.804218e-05, 4.8974259132, 103.0927742186),
    (2.990245e-05, 0.80692155639, 2118.7638603784),
    (1.977572e-05, 5.08915489088, 956.2891559706),
    (1.853679e-05, 2.76941001747, 1596.1864422846),
    (1.7728e-05, 0.72631739446, 742.9900605326),
    (1.812965e-05, 3.84602148747, 95.9792272178),
    (1.532945e-05, 4.31556714501, 117.3198682202),
    (1.904067e-05, 1.85937873703, 1581.959348283),
    (1.539212e-05, 1.47899172821, 639.897286314),
    (1.632362e-05, 1.41504212408, 1045.1548361876),
    (1.023812e-05, 2.57182697715, 433.7117378768),
    (1.055422e-05, 2.50844222977, 1265.5674786264),
    (9.81775e-06, 2.18800022614, 220.4126424388),
    (9.40094e-06, 1.34873014473, 625.6701923124),
    (8.39712e-06, 6.20534871612, 942.062061969),
    (9.85733e-06, 1.42746834265, 1169.5882514086),
    (7.78939e-06, 5.49323533683, 309.2783226558),
    (7.65192e-06, 1.96892067856, 1155.361157407),
    (6.43975e-06, 4.25838784988, 213.299095438),
    (7.34378e-06, 0.11449859192, 1162.4747044078),
    (5.38315e-06, 4.2457528015, 853.196381752),
    (5.01903e-06, 4.81386721508, 199.0720014364),
    (4.99873e-06, 3.02041735659, 330.6189636582),
];
pub(super) const X2: &[Term] = &[
    (0.00123864644, 4.13563277513, 522.5774180938),
    (0.00121521296, 0.21155109275, 536.8045120954),
    (0.00085355503, 0.0, 0.0),
    (0.00077685547, 5.29776154458, 529.6909650946),
    (0.00041410887, 5.12291589939, 1059.3819301892),
    (0.0001142307, 1.72917878238, 7.1135470008),
    (7.051587e-05, 0.74163703419, 1066.49547719),
    (5.711029e-05, 3.63172846494, 1052.2683831884),
    (5.242644e-05, 4.27482379441, 515.463871093),
    (4.03954e-05, 5.58417732117, 1589.0728952838),
    (3.706457e-05, 0.07769981349, 543.9180590962),
    (1.698817e-05, 2.44284418066, 110.2063212194),
    (1.134598e-05, 2.35807061809, 426.598190876),
    (1.322673e-05, 1.6314254998, 14.2270940016),
    (8.88203e-06, 4.66627290244, 526.5095713569),
    (8.65547e-06, 5.95596888539, 532.8723588323),
    (8.22579e-06, 1.96473995078, 632.7837393132),
    (9.94008e-06, 1.46985522253, 323.5054166574),
    (5.74066e-06, 1.66926588148, 949.1756089698),
    (7.33386e-06, 0.37132887987, 103.0927742186),
    (5.71711e-06, 3.16912095909, 1045.1548361876),
    (5.14256e-06, 5.97103330686, 525.7588118315),
    (5.12225e-06, 4.6553500001, 533.6231183577),
    (5.9593e-06, 2.85993171505, 735.8765135318),
    (4.58533e-06, 1.24450068286, 1596.1864422846),
    (4.19126e-06, 2.61042238424, 117.3198682202),
    (3.7484e-06, 5.55821526471, 95.9792272178),
    (3.41765e-06, 0.39491407125, 206.1855484372),
    (3.32926e-06, 6.00008752152, 2118.7638603784),
    (2.94743e-06, 4.41871274898, 419.4846438752),
    (2.82018e-06, 3.7109826237, 1581.959348283),
    (2.64464e-06, 3.68007673744, 956.2891559706),
];
pub(super) const X3: &[Term] = &[
    (0.00017071323, 5.86133022278, 522.5774180938),
    (0.00016713548, 4.77458794485, 536.8045120954),
    (3.34861e-05, 0.0, 0.0),
    (1.787838e-05, 3.56550298031, 1059.3819301892),
    (1.435449e-05, 5.98502036587, 515.463871093),
    (1.080194e-05, 5.42530305914, 1066.49547719),
    (1.014206e-05, 4.64773902077, 543.9180590962),
    (1.073175e-05, 6.22314467964, 7.1135470008),
    (7.11065e-06, 5.50680515205, 1052.2683831884),
    (2.61089e-06, 4.28269834394, 1589.0728952838),
    (3.01054e-06, 6.1984132109, 14.2270940016),
    (1.34738e-06, 4.94746197927, 1045.1548361876),
    (1.2429e-06, 0.37523072266, 110.2063212194),
];
pub(super) const X4: &[Term] = &[
    (1.762402e-05, 1.32863039757, 522.5774180938),
    (1.717846e-05, 3.03331531843, 536.8045120954),
    (3.04063e-06, 1.43144096257, 515.463871093),
    (2.16508e-06, 2.91205595526, 543.9180590962),
    (1.28193e-06, 3.83022265336, 1066.49547719),
    (1.60571e-06, 3.14159265359, 0.0),
    (8.1343e-07, 4.47957999274, 7.1135470008),
    (6.8446e-07, 1.06498404827, 1052.2683831884),
];
pub(super) const X5: &[Term] = &[
    (1.31471e-06, 3.21284928867, 522.5774180938),
    (1.26748e-06, 1.16307002134, 536.8045120954),
    (4.8324e-07, 3.19657723128, 515.463871093),
    (3.4034e-07, 1.12801913258, 543.9180590962),
];

pub(super) const Y0: &[Term] = &[
    (5.19520046589, 5.31203162731, 529.6909650946),
    (0.12592862602, 5.66160227728, 1059.3819301892),
    (0.09363670616, 3.14159265359, 0.0),
    (0.01508275299, 5.43934968102, 522.5774180938),
    (0.0147580937, 2.04679566495, 536.8045120954),
    (0.00457750806, 6.01129093501, 1589.0728952838),
    (0.00300686679, 3.6094805074, 7.1135470008),
    (0.00378285578, 3.53006782383, 103.0927742186),
    (0.00192333128, 3.45690564771, 426.598190876),
    (0.00146104656, 4.62267224431, 110.2063212194),
    (0.00139480058, 4.00075307706, 632.7837393132),
    (0.00132696764, 5.62184581859, 213.299095438),
    (0.00101999807, 4.57594598884, 1052.2683831884),
    (0.0011404311, 4.72982262969, 1162.4747044078),
    (0.00072091178, 2.39048659148, 1066.49547719),
    (0.00059051769, 2.89529070968, 949.1756089698),
    (0.00068374489, 1.86537074374, 846.0828347512),
    (0.00029807369, 4.5210577274, 206.1855484372),
    (0.00026933579, 3.86233956827, 419.4846438752),
    (0.00026619714, 3.28203174951, 323.5054166574),
    (0.0002087378, 3.79369881757, 735.8765135318),
    (0.00019727397, 0.07818534532, 2118.7638603784),
    (0.00018639846, 0.38751972138, 316.3918696566),
    (0.00016355726, 5.56997881604, 515.463871093),
    (0.00014606858, 0.47759399145, 742.9900605326),
    (0.00011419853, 1.91089341468, 543.9180590962),
    (0.00012153427, 2.18151972499, 525.7588118315),
    (0.00011988875, 5.29687602089, 533.6231183577),
    (8.443107e-05, 1.91435801697, 639.897286314),
    (8.163163e-05, 4.00303742375, 1478.8665740644),
    (8.732789e-05, 5.09607066097, 1692.1656695024),
    (7.414115e-05, 4.41141990461, 956.2891559706),
    (7.619486e-05, 5.59554151997, 1265.5674786264),
    (7.779184e-05, 4.83346300662, 1581.959348283),
    (5.322882e-05, 5.81740472645, 526.5095713569),
    (5.217025e-05, 1.66178643542, 532.8723588323),
    (5.772132e-05, 3.46915716927, 14.2270940016),
    (4.528355e-05, 2.18377558038, 1375.7737998458),
    (3.939875e-05, 2.73830531054, 1596.1864422846),
    (4.567181e-05, 3.71300776935, 95.9792272178),
    (3.235419e-05, 4.76600347062, 625.6701923124),
    (3.14074e-05, 5.59566796922, 309.2783226558),
    (2.855423e-05, 4.44478286006, 117.3198682202),
    (2.445625e-05, 2.6703695223, 433.7117378768),
    (2.253545e-05, 4.28462825722, 838.9692877504),
    (2.672262e-05, 1.61857897069, 1169.5882514086),
    (2.423639e-05, 2.32942339839, 220.4126424388),
    (2.362662e-05, 4.60417580207, 1155.361157407),
    (2.409581e-05, 4.33196301609, 1045.1548361876),
    (1.458169e-05, 4.18761881277, 853.196381752),
    (1.432195e-05, 3.248245545, 942.062061969),
    (1.646568e-05, 3.91965876562, 74.7815985673),
    (1.05027e-05, 4.83706014327, 1795.258443721),
    (1.002355e-05, 1.5093193987, 1272.6810256272),
    (1.087727e-05, 5.84673086939, 527.2432845398),
    (1.079512e-05, 1.63448507346, 532.1386456494),
];
pub(super) const Y1: &[Term] = &[
    (0.01694798253, 3.14159265359, 0.0),
    (0.00634859798, 4.8190319965, 1059.3819301892),
    (0.00601160431, 0.8581124994, 522.5774180938),
    (0.00588928504, 0.3449157689, 536.8045120954),
    (0.00081187145, 1.90914316532, 7.1135470008),
    (0.0004688809, 1.91294535618, 529.6909650946),
    (0.00046194129, 5.16955994561, 1589.0728952838),
    (0.00032503453, 0.17640743623, 1052.2683831884),
    (0.00031231694, 0.77623645597, 1066.49547719),
    (0.00019462096, 3.0095711947, 110.2063212194),
    (0.00017738615, 2.46531787101, 426.598190876),
    (0.00013701692, 5.02070197804, 632.7837393132),
    (0.00013034616, 0.98979834442, 515.463871093),
    (9.12266e-05, 0.21022587969, 543.9180590962),
    (8.10905e-05, 4.58123811601, 949.1756089698),
    (7.145229e-05, 1.60381236094, 323.5054166574),
    (3.957592e-05, 6.18550697817, 206.1855484372),
    (4.347346e-05, 5.85522835488, 735.8765135318),
    (3.401735e-05, 1.33033225252, 526.5095713569),
    (3.331887e-05, 6.14951835712, 532.8723588323),
    (3.866147e-05, 1.76877582038, 14.2270940016),
    (3.094257e-05, 1.00670454701, 419.4846438752),
    (3.044205e-05, 0.08329779827, 525.7588118315),
    (3.001484e-05, 1.11280606283, 533.6231183577),
    (2.977284e-05, 3.35507028507, 103.0927742186),
    (2.3471e-05, 2.0678177539, 316.3918696566),
    (2.990192e-05, 5.51944830506, 2118.7638603784),
    (1.875464e-05, 5.32657356489, 742.9900605326),
    (1.854067e-05, 1.19908734197, 1596.1864422846),
    (1.968401e-05, 3.51896739844, 956.2891559706),
    (1.808627e-05, 5.40287543026, 95.9792272178),
    (1.530472e-05, 2.75094722237, 117.3198682202),
    (1.885393e-05, 0.2990597371, 1581.959348283),
    (1.516541e-05, 6.21684203571, 639.897286314),
    (1.636913e-05, 6.09270756447, 1045.1548361876),
    (1.260123e-05, 0.07143173954, 625.6701923124),
    (1.028165e-05, 1.00301485824, 433.7117378768),
    (1.035933e-05, 0.98273794152, 1265.5674786264),
    (9.72507e-06, 0.6383264636, 220.4126424388),
    (9.83542e-06, 6.14294208089, 1169.5882514086),
    (7.78705e-06, 4.83558543631, 942.062061969),
    (8.86143e-06, 1.10269264426, 309.2783226558),
    (8.41776e-06, 0.18391927728, 1155.361157407),
    (7.67993e-06, 4.84778769533, 1162.4747044078),
    (5.41536e-06, 2.66914118638, 853.196381752),
    (5.51952e-06, 5.72755176773, 213.299095438),
    (4.99533e-06, 1.45057427365, 330.6189636582),
];
pub(super) const Y2: &[Term] = &[
    (0.00124032509, 2.56495576833, 522.5774180938),
    (0.00121455991, 4.9239876638, 536.8045120954),
    (0.00076523263, 3.75913371793, 529.6909650946),
    (0.00076943042, 3.14159265359, 0.0),
    (0.000413576, 3.55228440457, 1059.3819301892),
    (0.00011277667, 0.18559902389, 7.1135470008),
    (7.051103e-05, 5.4540436857, 1066.49547719),
    (5.71944e-05, 2.0597000023, 1052.2683831884),
    (5.286157e-05, 2.69490465064, 515.463871093),
    (4.039038e-05, 4.01341034637, 1589.0728952838),
    (3.704528e-05, 4.79029292271, 543.9180590962),
    (1.280283e-05, 1.47574006861, 110.2063212194),
    (1.059783e-05, 0.89610748176, 426.598190876),
    (1.320627e-05, 0.05786048417, 14.2270940016),
    (8.88144e-06, 3.09675195621, 526.5095713569),
    (8.64544e-06, 4.38537588795, 532.8723588323),
    (8.20223e-06, 0.37911850134, 632.7837393132),
    (9.93728e-06, 6.18613980226, 323.5054166574),
    (5.73001e-06, 0.1074449197, 949.1756089698),
    (5.7148e-06, 1.57855126864, 1045.1548361876),
    (6.24115e-06, 1.29414272655, 735.8765135318),
    (5.13863e-06, 4.40000698225, 525.7588118315),
    (5.11927e-06, 3.08494935962, 533.6231183577),
    (4.58314e-06, 5.95712671606, 1596.1864422846),
    (4.17651e-06, 1.04909922555, 117.3198682202),
    (3.57612e-06, 2.57817679198, 419.4846438752),
    (3.72789e-06, 0.82429067684, 95.9792272178),
    (3.32599e-06, 4.43064686875, 2118.7638603784),
    (2.63411e-06, 1.67577905079, 625.6701923124),
    (2.61838e-06, 1.57658925499, 206.1855484372),
    (2.8328e-06, 2.13607070848, 1581.959348283),
    (2.61886e-06, 2.11384561317, 956.2891559706),
];
pub(super) const Y3: &[Term] = &[
    (0.00017085516, 4.29096904063, 522.5774180938),
    (0.00016701353, 3.20365737109, 536.8045120954),
    (4.006038e-05, 0.0, 0.0),
    (1.782451e-05, 1.99283071153, 1059.3819301892),
    (1.443816e-05, 4.40866555269, 515.463871093),
    (1.079405e-05, 3.85450799252, 1066.49547719),
    (1.013157e-05, 3.07729621279, 543.9180590962),
    (1.055565e-05, 4.70184773789, 7.1135470008),
    (7.10385e-06, 3.93734062697, 1052.2683831884),
    (2.59601e-06, 2.7156647839, 1589.0728952838),
    (3.00599e-06, 4.62156117661, 14.2270940016),
    (1.34826e-06, 3.36277253898, 1045.1548361876),
    (1.42837e-06, 5.2881430733, 529.6909650946),
];
pub(super) const Y4: &[Term] = &[
    (1.762645e-05, 6.04159386554, 522.5774180938),
    (1.716045e-05, 1.4620628571, 536.8045120954),
    (3.05036e-06, 6.14052786819, 515.463871093),
    (2.16203e-06, 1.34301856666, 543.9180590962),
    (1.27895e-06, 2.25941664796, 1066.49547719),
    (8.174e-07, 2.84766415879, 7.1135470008),
    (6.8446e-07, 5.77736913573, 1052.2683831884),
    (7.0306e-07, 0.0, 0.0),
];
pub(super) const Y5: &[Term] = &[
    (1.31471e-06, 1.64205554066, 522.5774180938),
    (1.26634e-06, 5.87372673584, 536.8045120954),
    (4.8269e-07, 1.62788936723, 515.463871093),
    (3.4034e-07, 5.84040207007, 543.9180590962),
];

pub(super) const Z0: &[Term] = &[
    (0.11823100489, 3.55844646343, 529.6909650946),
    (0.00859031952, 0.0, 0.0),
    (0.00286562094, 3.90812238338, 1059.3819301892),
    (0.00042388592, 3.60144191032, 522.5774180938),
    (0.00033295491, 0.30297050585, 536.8045120954),
    (0.0001041616, 4.25764593061, 1589.0728952838),
    (7.449294e-05, 5.2421310415, 103.0927742186),
    (6.910102e-05, 1.75032945752, 7.1135470008),
    (5.292012e-05, 1.68231447192, 426.598190876),
    (4.313598e-05, 3.70673689841, 213.299095438),
    (3.784265e-05, 2.71522544491, 110.2063212194),
    (3.798016e-05, 2.16715743175, 632.7837393132),
    (2.455385e-05, 2.96904135659, 1052.2683831884),
    (2.461547e-05, 2.99889460411, 1162.4747044078),
    (2.001451e-05, 2.68535838309, 419.4846438752),
    (2.163471e-05, 6.26718259854, 846.0828347512),
    (1.633653e-05, 0.64194743493, 1066.49547719),
    (1.450672e-05, 1.17108416193, 949.1756089698),
];
pub(super) const Z1: &[Term] = &[
    (0.00407072175, 1.52699353482, 529.6909650946),
    (0.00020307341, 2.59878269248, 1059.3819301892),
    (0.00014424953, 4.85400155025, 536.8045120954),
    (0.00015474611, 0.0, 0.0),
    (0.00012730364, 5.45536715732, 522.5774180938),
    (2.100882e-05, 0.09538864287, 7.1135470008),
    (1.230425e-05, 3.14222500244, 1589.0728952838),
    (7.60633e-06, 5.27867348162, 1066.49547719),
    (6.78832e-06, 4.74895422783, 1052.2683831884),
    (5.97018e-06, 1.04748050782, 110.2063212194),
    (5.70024e-06, 1.09418619361, 103.0927742186),
];
pub(super) const Z2: &[Term] = &[
    (0.00028635326, 3.01374166973, 529.6909650946),
    (3.114752e-05, 3.13228646176, 536.8045120954),
    (2.379765e-05, 0.9557434534, 522.5774180938),
    (1.310111e-05, 2.05263704913, 1059.3819301892),
    (8.98757e-06, 0.0, 0.0),
    (3.05635e-06, 4.64213318439, 7.1135470008),
];
pub(super) const Z3: &[Term] = &[
    (9.64355e-06, 4.79228412032, 529.6909650946),
    (4.43244e-06, 1.39969952998, 536.8045120954),
    (2.956e-06, 2.81281406373, 522.5774180938),
];
pub(super) const Z4: &[Term] = &[];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
