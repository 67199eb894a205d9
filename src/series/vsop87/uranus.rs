//! VSOP87A terms for Uranus: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 486 terms, truncated offline (see `vsop87_truncate`).

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (19.17370730359, 5.48133416489, 74.7815985673),
    (1.32272523872, 0.0, 0.0),
    (0.44402496796, 1.65967519586, 149.5631971346),
    (0.14668209481, 3.42395862804, 73.297125859),
    (0.14130269479, 4.39572927934, 76.2660712756),
    (0.06201106178, 5.14043574125, 1.4844727083),
    (0.01542951343, 4.12121838072, 224.3447957019),
    (0.0144421666, 2.65117115201, 148.0787244263),
    (0.00944995563, 1.65869338757, 11.0457002639),
    (0.00657524815, 0.57595170636, 151.0476698429),
    (0.00621624676, 3.05882246638, 77.7505439839),
    (0.00585182542, 4.79934779678, 71.8126531507),
    (0.0063400027, 4.09556589724, 63.7358983034),
    (0.00547699056, 3.63127725056, 85.8272988312),
    (0.00458219984, 3.90788284112, 2.9689454166),
    (0.00496087649, 0.59947400861, 529.6909650946),
    (0.00383625535, 6.18762010576, 138.5174968707),
    (0.00267938156, 0.96885660137, 213.299095438),
    (0.00215368005, 5.30877641428, 38.1330356378),
    (0.00145505389, 2.31759757085, 70.8494453042),
    (0.00135340032, 5.51062460816, 78.7137518304),
    (0.00119593859, 4.10138544267, 39.6175083461),
    (0.00125105686, 2.51455273063, 111.4301614968),
    (0.00111260244, 5.12252784325, 222.8603229936),
    (0.00104619827, 3.90538916334, 146.594251718),
    (0.00110125387, 4.45473528724, 35.1640902212),
    (0.00063584588, 0.29966233158, 299.1263942692),
    (0.00053904041, 3.92590422507, 3.9321532631),
    (0.00065066905, 3.73008452906, 109.9456887885),
    (0.00039181662, 2.68841280769, 4.4534181249),
    (0.00034341683, 3.03781661928, 225.8292684102),
    (0.00033134636, 2.54201591218, 65.2203710117),
    (0.00034555652, 1.84699329257, 79.2350166922),
    (0.0003386705, 5.98418436103, 70.3281804424),
    (0.00028371614, 2.58026657123, 127.4717966068),
    (0.00035943348, 4.08754543016, 202.2533951741),
    (0.00025208833, 5.30272144657, 9.5612275556),
    (0.00023467802, 4.09729860322, 145.6310438715),
    (0.00022963939, 5.51475073655, 84.3428261229),
    (0.00031823951, 5.53948583244, 152.5321425512),
    (0.00028384953, 6.01785430306, 184.7272873558),
    (0.00026657176, 6.11027939727, 160.6088973985),
    (0.00019676762, 5.53431398332, 74.6697239827),
    (0.00019653873, 2.28660913421, 74.8934731519),
    (0.0001995428, 0.57450958037, 12.5301729722),
    (0.00018565067, 0.62225019017, 52.6901980395),
    (0.00020084756, 4.47297488471, 22.0914005278),
    (0.00019926329, 1.39878194708, 112.9146342051),
    (0.00018575632, 5.7021747579, 33.6796175129),
    (0.0001658787, 4.86920309163, 108.4612160802),
    (0.00015171194, 2.88415453399, 41.1019810544),
    (0.000112458, 6.11597016146, 71.6002048296),
    (0.00013948521, 6.2754569416, 221.3758502853),
    (0.0001079835, 1.70031857078, 77.962992305),
    (0.00013593955, 2.55407820633, 87.3117715395),
    (0.00011997848, 0.94875212305, 1059.3819301892),
    (0.00012884351, 5.0873799947, 145.1097790097),
    (0.00012394786, 6.2189287885, 72.3339180125),
    (0.00012253318, 0.19452856525, 36.6485629295),
    (0.00011538642, 1.77241794539, 77.2292791221),
    (8.738409e-05, 4.96956808452, 186.2117600641),
    (7.095608e-05, 1.30384750044, 297.6419215609),
    (6.262602e-05, 1.71385983783, 153.4953503977),
    (7.487302e-05, 0.11408470667, 426.598190876),
    (7.798974e-05, 5.82410372587, 340.7708920448),
    (6.669249e-05, 5.08626589612, 62.2514255951),
    (5.505358e-05, 3.31282108025, 140.001969579),
    (5.372927e-05, 4.12498282863, 75.3028634291),
    (5.354242e-05, 3.69263973447, 74.2603337055),
    (4.478123e-05, 1.11838191479, 66.70484372),
    (4.233075e-05, 3.94913608184, 265.9892934775),
    (5.038353e-05, 4.68664376918, 18.1592472647),
    (4.57047e-05, 0.97536665751, 183.2428146475),
    (4.751325e-05, 4.95762395337, 73.8183907208),
    (4.448651e-05, 0.29436142982, 114.3991069134),
    (4.515952e-05, 2.8857630312, 75.7448064138),
];
pub(super) const X1: &[Term] = &[
    (0.00739730021, 6.01067825116, 149.5631971346),
    (0.00526878306, 3.141592653589793, 0.0),
    (0.00239840801, 5.33657762707, 73.297125859),
    (0.00229676787, 2.48204455775, 76.2660712756),
    (0.00111045158, 5.5715723596, 11.0457002639),
    (0.00096352822, 0.35070389084, 63.7358983034),
    (0.0008151187, 1.21058618039, 85.8272988312),
    (0.00045687564, 2.29216583843, 138.5174968707),
    (0.00051382501, 2.1893512526, 224.3447957019),
    (0.0003884433, 0.30724575951, 70.8494453042),
    (0.00036158493, 1.23634798757, 78.7137518304),
    (0.00032333094, 5.06666556704, 74.7815985673),
    (0.00021685656, 4.93710968392, 151.0476698429),
    (0.0001944197, 1.30617490304, 77.7505439839),
    (0.00017376241, 0.2460722123, 71.8126531507),
    (0.00015211071, 5.5314163314, 3.9321532631),
    (7.735984e-05, 1.61349552789, 71.6002048296),
    (7.425078e-05, 6.20357977116, 77.962992305),
    (6.995857e-05, 2.40633283814, 145.6310438715),
    (7.291691e-05, 2.23597571444, 2.9689454166),
    (7.585264e-05, 2.7607421833, 148.0787244263),
    (4.378335e-05, 3.7429632224, 160.6088973985),
    (4.127713e-05, 1.48475181305, 22.0914005278),
    (3.933541e-05, 4.73864204208, 65.2203710117),
    (2.910312e-05, 5.9194133305, 127.4717966068),
    (2.788434e-05, 4.90117297196, 213.299095438),
    (2.802392e-05, 3.76505436434, 52.6901980395),
    (2.545264e-05, 3.36768337628, 9.5612275556),
    (2.647073e-05, 4.53813176345, 12.5301729722),
    (3.177614e-05, 4.65226634926, 299.1263942692),
    (2.228396e-05, 0.18087986338, 87.3117715395),
    (2.824668e-05, 3.40143685673, 84.3428261229),
    (2.525203e-05, 2.83821144961, 18.1592472647),
    (2.216987e-05, 4.78338909951, 72.3339180125),
    (1.624493e-05, 3.75817281127, 153.4953503977),
    (1.928881e-05, 2.39940180311, 39.6175083461),
    (1.555444e-05, 4.13741667297, 73.8183907208),
    (1.600865e-05, 0.08376247543, 79.2350166922),
    (1.476317e-05, 3.67283851029, 75.7448064138),
    (1.427088e-05, 1.45690759014, 70.3281804424),
    (1.533469e-05, 3.71776498048, 152.5321425512),
    (1.747266e-05, 3.24870046809, 77.2292791221),
    (1.716831e-05, 3.39415662657, 222.8603229936),
    (1.707504e-05, 1.11296012106, 225.8292684102),
    (1.734228e-05, 5.39619902298, 146.594251718),
    (1.476617e-05, 3.53047075439, 3.1813937377),
    (1.179645e-05, 5.13953276367, 220.4126424388),
    (1.239315e-05, 0.98221206501, 4.4534181249),
    (1.099691e-05, 1.35138854505, 62.2514255951),
    (9.77123e-06, 1.01847642495, 74.6697239827),
    (9.75571e-06, 0.5190324215, 74.8934731519),
    (1.061312e-05, 5.0012510538, 131.4039498699),
    (8.91654e-06, 4.27405127452, 426.598190876),
    (1.029261e-05, 5.42434597865, 109.9456887885),
    (8.68857e-06, 2.79792544805, 56.6223513026),
    (7.4742e-06, 4.78455200239, 92.940845832),
    (7.43194e-06, 5.94179390589, 206.1855484372),
    (8.28266e-06, 3.32679639479, 7.1135470008),
    (6.47136e-06, 0.20307260484, 80.1982245387),
    (7.20965e-06, 0.28353896718, 1.4844727083),
    (6.05458e-06, 0.10335604387, 1059.3819301892),
    (6.66117e-06, 3.49754791028, 96.8729990951),
];
pub(super) const X2: &[Term] = &[
    (0.00016015732, 3.83700026619, 74.7815985673),
    (0.00010915299, 3.0298777627, 149.5631971346),
    (7.497619e-05, 3.83429136661, 11.0457002639),
    (8.053623e-05, 2.54646146122, 63.7358983034),
    (5.408033e-05, 4.78033642303, 70.8494453042),
    (5.021971e-05, 3.04632772928, 78.7137518304),
    (6.717313e-05, 5.31264214501, 85.8272988312),
    (5.284684e-05, 2.11901942097, 73.297125859),
    (4.874936e-05, 5.68616132176, 76.2660712756),
    (3.002124e-05, 4.07944398452, 138.5174968707),
    (2.521797e-05, 3.36028253173, 71.6002048296),
    (2.413832e-05, 4.4586522569, 77.962992305),
    (2.221373e-05, 0.87427485235, 3.9321532631),
    (2.291767e-05, 0.0, 0.0),
    (1.04025e-05, 0.73133408837, 145.6310438715),
    (1.0461e-05, 5.85311910228, 224.3447957019),
    (6.61586e-06, 1.01544505345, 18.1592472647),
    (4.97229e-06, 5.27733214183, 22.0914005278),
    (5.02471e-06, 2.2251421471, 151.0476698429),
    (4.78348e-06, 3.19107941219, 72.3339180125),
    (3.82454e-06, 5.20159531773, 77.7505439839),
    (4.69767e-06, 1.82481202242, 3.1813937377),
    (4.03174e-06, 1.56215178272, 160.6088973985),
    (3.29455e-06, 2.55333634094, 71.8126531507),
    (3.84741e-06, 4.7323932475, 77.2292791221),
    (3.35931e-06, 0.0537786896, 65.2203710117),
    (2.8138e-06, 0.54117101233, 131.4039498699),
    (2.6686e-06, 0.01657445784, 52.6901980395),
    (2.34876e-06, 4.75379495234, 56.6223513026),
    (2.47761e-06, 2.17938049654, 127.4717966068),
    (2.19378e-06, 3.47071742536, 220.4126424388),
    (3.01025e-06, 1.77677607945, 84.3428261229),
    (2.84485e-06, 5.80269050272, 148.0787244263),
    (2.05875e-06, 2.90044450656, 92.940845832),
    (2.11227e-06, 5.5820166474, 153.4953503977),
    (1.98069e-06, 2.71231997005, 12.5301729722),
    (2.04743e-06, 4.25027722017, 87.3117715395),
    (1.52803e-06, 1.3751383109, 206.1855484372),
    (1.39847e-06, 1.67730385016, 9.5612275556),
    (1.38451e-06, 1.03809761305, 213.299095438),
    (1.17677e-06, 4.12702744572, 522.5774180938),
    (1.14603e-06, 0.21128941925, 536.8045120954),
    (1.21438e-06, 1.52422428772, 7.1135470008),
    (1.06322e-06, 5.89383486521, 146.3818033969),
    (1.03834e-06, 3.59301778375, 62.2514255951),
];
pub(super) const X3: &[Term] = &[
    (1.307049e-05, 0.0, 0.0),
    (6.79651e-06, 2.93375081556, 70.8494453042),
    (6.31782e-06, 4.88998230611, 78.7137518304),
    (5.7854e-06, 0.78827411585, 149.5631971346),
    (5.55324e-06, 4.67554978713, 63.7358983034),
    (4.55887e-06, 3.17331985662, 85.8272988312),
    (4.28312e-06, 4.09419341772, 73.297125859),
    (4.08432e-06, 3.72971926457, 76.2660712756),
    (4.46893e-06, 5.008101795, 71.6002048296),
    (4.24302e-06, 2.81325875072, 77.962992305),
    (3.44605e-06, 2.22416564687, 11.0457002639),
    (2.53001e-06, 2.51182572008, 3.9321532631),
    (1.88565e-06, 0.81232221065, 74.7815985673),
    (1.32014e-06, 5.73012783198, 138.5174968707),
    (1.20517e-06, 5.48054814455, 18.1592472647),
    (1.2134e-06, 5.32278814741, 145.6310438715),
    (8.1059e-07, 0.31859981536, 3.1813937377),
    (5.2581e-07, 3.32426714386, 224.3447957019),
    (5.0989e-07, 2.38152145113, 131.4039498699),
    (4.1352e-07, 0.40988109551, 56.6223513026),
    (4.5947e-07, 2.93842177968, 22.0914005278),
    (3.4956e-07, 6.15180077697, 151.0476698429),
    (3.455e-07, 1.01095270214, 92.940845832),
    (2.9013e-07, 1.77495983861, 220.4126424388),
    (2.8439e-07, 5.71063354637, 160.6088973985),
    (2.6418e-07, 1.14627019293, 153.4953503977),
    (2.0539e-07, 3.06195471917, 206.1855484372),
    (1.9493e-07, 4.40804069151, 67.6680515665),
    (1.8709e-07, 3.44807838704, 81.8951455681),
    (1.9345e-07, 2.38872118054, 52.6901980395),
    (1.9435e-07, 1.54656365767, 65.2203710117),
    (1.7211e-07, 4.69608865329, 127.4717966068),
    (2.0752e-07, 0.21287415066, 84.3428261229),
    (1.7277e-07, 1.24548498498, 146.3818033969),
];
pub(super) const X4: &[Term] = &[
    (6.2987e-07, 3.141592653589793, 0.0),
    (3.4199e-07, 0.4270288582, 63.7358983034),
    (2.6702e-07, 5.34493737706, 149.5631971346),
    (2.7042e-07, 1.11625109948, 85.8272988312),
    (1.6293e-07, 3.62714711041, 18.1592472647),
    (6.899e-08, 4.21539961908, 131.4039498699),
    (5.852e-08, 2.32484296944, 56.6223513026),
    (5.227e-08, 5.41079816474, 92.940845832),
];
pub(super) const X5: &[Term] = &[];

pub(super) const Y0: &[Term] = &[
    (19.16518231584, 3.91045677002, 74.7815985673),
    (0.44390465203, 0.08884111329, 149.5631971346),
    (0.16256125476, 3.141592653589793, 0.0),
    (0.14755940186, 1.85423280679, 73.297125859),
    (0.14123958128, 2.82486076549, 76.2660712756),
    (0.06250078231, 3.56960243857, 1.4844727083),
    (0.01542668264, 2.55040539213, 224.3447957019),
    (0.01442356575, 1.08004542712, 148.0787244263),
    (0.00938975501, 0.09275714761, 11.0457002639),
    (0.00650331846, 2.76142680222, 63.7358983034),
    (0.0065734312, 5.28830704469, 151.0476698429),
    (0.0062132677, 1.48795811387, 77.7505439839),
    (0.00541961958, 3.24476486661, 71.8126531507),
    (0.00547472694, 2.06037924573, 85.8272988312),
    (0.0045958912, 2.3374553607, 2.9689454166),
    (0.00495936105, 5.3120575374, 529.6909650946),
    (0.00387922853, 4.62026923885, 138.5174968707),
    (0.00268363417, 5.6808529902, 213.299095438),
    (0.00216239629, 3.7380076758, 38.1330356378),
    (0.00144032475, 0.7501570092, 70.8494453042),
    (0.0013529082, 3.93970260616, 78.7137518304),
    (0.00119670613, 2.5305878378, 39.6175083461),
    (0.00124868545, 0.94315917319, 111.4301614968),
    (0.0011120486, 3.55163219419, 222.8603229936),
    (0.00104507929, 2.33345675603, 146.594251718),
    (0.00108584454, 6.02234848388, 35.1640902212),
    (0.00063573747, 5.0120496792, 299.1263942692),
    (0.00053289771, 2.38437587876, 3.9321532631),
    (0.00063774261, 2.15607602904, 109.9456887885),
    (0.00039218598, 1.11841109252, 4.4534181249),
    (0.00034205426, 0.92405922576, 65.2203710117),
    (0.00034334377, 1.46696169843, 225.8292684102),
    (0.00034538316, 0.27613780697, 79.2350166922),
    (0.00039256771, 5.75956853703, 202.2533951741),
    (0.00026157754, 3.74097610798, 9.5612275556),
    (0.00023427328, 2.52740125551, 145.6310438715),
    (0.00022933138, 3.9445554035, 84.3428261229),
    (0.00031816303, 3.96860170484, 152.5321425512),
    (0.00025237176, 4.45141413666, 70.3281804424),
    (0.00028372491, 4.44714627097, 184.7272873558),
    (0.00026652859, 4.53944395347, 160.6088973985),
    (0.00019666208, 3.96350065335, 74.6697239827),
    (0.00019643845, 0.71577796385, 74.8934731519),
    (0.00019838981, 5.29113397354, 12.5301729722),
    (0.00021523908, 4.93565132068, 36.6485629295),
    (0.00015537967, 1.8786327546, 52.6901980395),
    (0.000201151, 3.45473780762, 127.4717966068),
    (0.00020051641, 2.90386352937, 22.0914005278),
    (0.00019901477, 6.11075402434, 112.9146342051),
    (0.00018126776, 0.98478853787, 33.6796175129),
    (0.00015174962, 1.31314034959, 41.1019810544),
    (0.0001123902, 4.54508334011, 71.6002048296),
    (0.00013948849, 4.70474945682, 221.3758502853),
    (0.00010819728, 0.12807029856, 77.962992305),
    (0.00013589665, 0.9831371993, 87.3117715395),
    (0.00011996772, 5.66129275335, 1059.3819301892),
    (0.00012407787, 4.6494578334, 72.3339180125),
    (0.0001153114, 0.20190074645, 77.2292791221),
    (8.73615e-05, 3.39874828293, 186.2117600641),
    (7.093587e-05, 6.01613487245, 297.6419215609),
    (6.408245e-05, 3.93246367895, 62.2514255951),
    (6.261153e-05, 0.14258542752, 153.4953503977),
    (7.494e-05, 4.82565771386, 426.598190876),
    (7.856014e-05, 1.12354254831, 340.7708920448),
    (5.516018e-05, 1.73758326119, 140.001969579),
    (5.556643e-05, 3.68095215063, 145.1097790097),
    (5.368405e-05, 2.55422957958, 75.3028634291),
    (5.350948e-05, 2.12171493922, 74.2603337055),
    (4.508794e-05, 5.82224064821, 66.70484372),
    (4.290374e-05, 5.54490766551, 265.9892934775),
    (5.013871e-05, 3.11907749268, 18.1592472647),
    (4.326138e-05, 5.70135056853, 183.2428146475),
    (4.750018e-05, 3.38678300054, 73.8183907208),
    (4.445347e-05, 5.00638490308, 114.3991069134),
    (4.509054e-05, 1.31254342829, 75.7448064138),
];
pub(super) const Y1: &[Term] = &[
    (0.02157896385, 0.0, 0.0),
    (0.00739227349, 4.43963890935, 149.5631971346),
    (0.00238545685, 3.76882493145, 73.297125859),
    (0.00229396424, 0.91090183978, 76.2660712756),
    (0.00110137111, 4.00844441616, 11.0457002639),
    (0.00094979054, 5.07141537066, 63.7358983034),
    (0.00081474163, 5.92275367106, 85.8272988312),
    (0.00045457174, 0.73292241207, 138.5174968707),
    (0.00051366974, 0.61844114994, 224.3447957019),
    (0.00038296005, 5.01873578671, 70.8494453042),
    (0.00036146116, 5.94859452787, 78.7137518304),
    (0.00032420558, 4.32617271732, 74.7815985673),
    (0.00021673269, 3.36607263522, 151.0476698429),
    (0.00019425087, 6.01842187783, 77.7505439839),
    (0.00017393206, 4.96098895488, 71.8126531507),
    (0.00014991169, 3.97176856758, 3.9321532631),
    (7.732367e-05, 0.04256630122, 71.6002048296),
    (7.438492e-05, 4.63165436478, 77.962992305),
    (6.979238e-05, 0.83723520791, 145.6310438715),
    (7.321559e-05, 0.66348425538, 2.9689454166),
    (7.595636e-05, 1.19807643487, 148.0787244263),
    (4.376824e-05, 2.17182724016, 160.6088973985),
    (3.962568e-05, 3.18042711824, 65.2203710117),
    (4.117202e-05, 6.1993161279, 22.0914005278),
    (2.830313e-05, 3.34365222278, 213.299095438),
    (2.690065e-05, 1.78946471198, 9.5612275556),
    (2.628159e-05, 2.97459067399, 12.5301729722),
    (3.174617e-05, 3.08131638838, 299.1263942692),
    (2.22751e-05, 4.89407437055, 87.3117715395),
    (2.821206e-05, 1.83130010947, 84.3428261229),
    (2.510693e-05, 1.27166561854, 18.1592472647),
    (2.224655e-05, 3.21541108798, 72.3339180125),
    (1.929662e-05, 4.68383962079, 52.6901980395),
    (1.707606e-05, 5.60415260609, 127.4717966068),
    (1.620819e-05, 2.18676505386, 153.4953503977),
    (1.926926e-05, 0.82821252139, 39.6175083461),
    (1.555611e-05, 2.56681954823, 73.8183907208),
    (1.595703e-05, 4.7955805786, 79.2350166922),
    (1.47655e-05, 2.10111459539, 75.7448064138),
    (1.531355e-05, 2.14701519407, 152.5321425512),
    (1.744564e-05, 1.67897185084, 77.2292791221),
    (1.713945e-05, 1.82334975258, 222.8603229936),
    (1.705184e-05, 5.82532917611, 225.8292684102),
    (1.739019e-05, 3.82452086292, 146.594251718),
    (1.291753e-05, 6.19666243545, 70.3281804424),
    (1.458526e-05, 5.10147126404, 3.1813937377),
    (1.179966e-05, 3.56807126055, 220.4126424388),
    (1.234914e-05, 5.69239889831, 4.4534181249),
    (1.075108e-05, 1.76286452034, 56.6223513026),
    (1.035661e-05, 6.12642568708, 62.2514255951),
    (9.78675e-06, 5.23202231955, 74.8934731519),
    (9.77123e-06, 5.73086540533, 74.6697239827),
    (1.114523e-05, 3.41304662369, 131.4039498699),
    (8.88937e-06, 2.70132350527, 426.598190876),
    (1.050191e-05, 3.84176879347, 109.9456887885),
    (7.64556e-06, 1.17341120063, 1.4844727083),
    (7.46231e-06, 3.21375560117, 92.940845832),
    (7.52227e-06, 4.36686229005, 206.1855484372),
    (6.49263e-06, 4.91621635684, 80.1982245387),
    (7.62421e-06, 1.67864314047, 7.1135470008),
    (6.05052e-06, 4.82003168096, 1059.3819301892),
    (6.65473e-06, 1.92732409009, 96.8729990951),
];
pub(super) const Y2: &[Term] = &[
    (0.00034812647, 3.141592653589793, 0.0),
    (0.00016589194, 2.2955674062, 74.7815985673),
    (0.00010905147, 1.45737963668, 149.5631971346),
    (7.484633e-05, 2.27968076918, 11.0457002639),
    (7.964298e-05, 0.97230247087, 63.7358983034),
    (5.3071e-05, 3.20519221878, 70.8494453042),
    (5.018595e-05, 1.47518527303, 78.7137518304),
    (6.713255e-05, 3.74148881189, 85.8272988312),
    (5.26517e-05, 0.54901216905, 73.297125859),
    (4.864822e-05, 4.11367426823, 76.2660712756),
    (2.995853e-05, 2.49432193549, 138.5174968707),
    (2.519021e-05, 1.78896824345, 71.6002048296),
    (2.418371e-05, 2.88675006488, 77.962992305),
    (2.185856e-05, 5.58862614977, 3.9321532631),
    (1.035578e-05, 5.44752448275, 145.6310438715),
    (1.044459e-05, 4.2797223936, 224.3447957019),
    (6.5918e-06, 5.73048296712, 18.1592472647),
    (4.96445e-06, 3.7129453742, 22.0914005278),
    (5.03264e-06, 0.65556547194, 151.0476698429),
    (4.77875e-06, 1.62059307105, 72.3339180125),
    (4.84216e-06, 3.4519080478, 3.1813937377),
    (3.81403e-06, 3.62830479384, 77.7505439839),
    (4.03003e-06, 6.27429134777, 160.6088973985),
    (3.33059e-06, 0.97920205195, 71.8126531507),
    (3.84754e-06, 3.16159208089, 77.2292791221),
    (3.36233e-06, 4.76282903544, 65.2203710117),
    (2.92404e-06, 3.58367735696, 56.6223513026),
    (2.8962e-06, 5.24475224875, 131.4039498699),
    (2.4999e-06, 1.3771562975, 127.4717966068),
    (2.20833e-06, 1.89936700362, 220.4126424388),
    (3.01291e-06, 0.20539719662, 84.3428261229),
    (2.13294e-06, 0.42767033738, 52.6901980395),
    (2.06036e-06, 1.32796659605, 92.940845832),
    (2.84114e-06, 4.23135833063, 148.0787244263),
    (2.11339e-06, 4.01130147721, 153.4953503977),
    (1.98865e-06, 1.1497855311, 12.5301729722),
    (2.04876e-06, 2.67799239908, 87.3117715395),
    (1.51532e-06, 6.09078229943, 206.1855484372),
    (1.42723e-06, 0.10949652735, 9.5612275556),
    (1.33164e-06, 5.80840699437, 213.299095438),
    (1.17885e-06, 2.56668410237, 522.5774180938),
    (1.14052e-06, 4.92349496195, 536.8045120954),
    (1.0599e-06, 6.11096017627, 7.1135470008),
    (1.06322e-06, 4.32303636127, 146.3818033969),
    (1.00445e-06, 2.04935236166, 62.2514255951),
];
pub(super) const Y3: &[Term] = &[
    (1.21138e-05, 0.0, 0.0),
    (6.68539e-06, 1.35719575778, 70.8494453042),
    (6.34232e-06, 3.31949833714, 78.7137518304),
    (5.80282e-06, 5.5024989316, 149.5631971346),
    (5.54688e-06, 3.11230721382, 63.7358983034),
    (4.55522e-06, 1.60057962784, 85.8272988312),
    (4.28309e-06, 2.52339539695, 73.297125859),
    (4.10924e-06, 2.15904083831, 76.2660712756),
    (4.46887e-06, 3.43730189985, 71.6002048296),
    (4.22459e-06, 1.24206088889, 77.962992305),
    (3.5424e-06, 0.67890104591, 11.0457002639),
    (2.46686e-06, 0.94534563236, 3.9321532631),
    (2.13878e-06, 5.65915292036, 74.7815985673),
    (1.32364e-06, 4.15026512788, 138.5174968707),
    (1.1945e-06, 3.90585537641, 18.1592472647),
    (1.20394e-06, 3.7466563771, 145.6310438715),
    (8.8187e-07, 1.90411105424, 3.1813937377),
    (5.2632e-07, 1.75498192807, 224.3447957019),
    (5.0576e-07, 0.78027105095, 131.4039498699),
    (5.3379e-07, 5.39427276412, 56.6223513026),
    (4.6166e-07, 1.35350701377, 22.0914005278),
    (3.4956e-07, 4.58100445018, 151.0476698429),
    (3.4551e-07, 5.72333746106, 92.940845832),
    (2.9345e-07, 0.20241030706, 220.4126424388),
    (2.8364e-07, 4.13984176064, 160.6088973985),
    (2.6418e-07, 5.85866043581, 153.4953503977),
    (2.0838e-07, 1.49657812541, 206.1855484372),
    (2.429e-07, 3.47380451115, 127.4717966068),
    (2.0448e-07, 2.29388641968, 52.6901980395),
    (1.8708e-07, 1.87727467097, 81.8951455681),
    (1.787e-07, 2.76211883479, 67.6680515665),
    (2.0164e-07, 6.22457490776, 65.2203710117),
    (2.0752e-07, 4.92517122004, 84.3428261229),
    (1.7277e-07, 5.95787288564, 146.3818033969),
];
pub(super) const Y4: &[Term] = &[
    (4.943e-07, 0.0, 0.0),
    (3.4198e-07, 5.13940292251, 63.7358983034),
    (2.6702e-07, 3.77414105026, 149.5631971346),
    (2.7044e-07, 5.82865569544, 85.8272988312),
    (1.6281e-07, 2.05669737682, 18.1592472647),
    (6.674e-08, 2.47653692518, 131.4039498699),
    (7.99e-08, 0.88303095823, 56.6223513026),
    (5.228e-08, 3.84002419343, 92.940845832),
];
pub(super) const Y5: &[Term] = &[];

pub(super) const Z0: &[Term] = &[
    (0.25878127698, 2.61861272578, 74.7815985673),
    (0.01774318778, 3.141592653589793, 0.0),
    (0.00599316131, 5.08119500585, 149.5631971346),
    (0.0019028189, 1.61643841193, 76.2660712756),
    (0.00190881685, 0.57869575952, 73.297125859),
    (0.00084626761, 2.26030150166, 1.4844727083),
    (0.00030734257, 0.23571721555, 63.7358983034),
    (0.00020842052, 1.26054208091, 224.3447957019),
    (0.00019734273, 6.04314677688, 148.0787244263),
    (0.0001253753, 5.17169051466, 11.0457002639),
    (0.00014582864, 6.14852037212, 71.8126531507),
    (0.00010407529, 3.65320417038, 213.299095438),
    (0.00011261541, 3.55973769686, 529.6909650946),
    (8.855669e-05, 4.03774505739, 151.0476698429),
    (8.23946e-05, 0.34225652715, 77.7505439839),
    (7.950169e-05, 0.72564903051, 85.8272988312),
    (6.867469e-05, 0.81417174224, 2.9689454166),
    (5.64872e-05, 3.45324719543, 138.5174968707),
    (4.581938e-05, 1.69668682344, 38.1330356378),
];
pub(super) const Z1: &[Term] = &[
    (0.00655916626, 0.0127194766, 74.7815985673),
    (0.00049648951, 0.0, 0.0),
    (0.00023874178, 2.7387049122, 149.5631971346),
    (7.552177e-05, 5.493042077, 76.2660712756),
    (5.941304e-05, 3.61254073304, 73.297125859),
    (2.868429e-05, 4.17954157878, 63.7358983034),
    (2.087455e-05, 5.97858625817, 1.4844727083),
    (1.827697e-05, 2.71810813335, 11.0457002639),
    (1.305063e-05, 4.52337002195, 85.8272988312),
    (1.15825e-05, 5.31913504112, 224.3447957019),
    (7.34112e-06, 3.8133172822, 70.8494453042),
    (6.90304e-06, 0.01086319936, 138.5174968707),
];
pub(super) const Z2: &[Term] = &[
    (0.00014697858, 1.75149165003, 74.7815985673),
    (1.600044e-05, 3.141592653589793, 0.0),
    (2.57139e-06, 5.91766895295, 73.297125859),
    (2.47413e-06, 5.67197956903, 149.5631971346),
    (1.2184e-06, 0.7586502535, 11.0457002639),
    (1.13629e-06, 2.28365428558, 85.8272988312),
];
pub(super) const Z3: &[Term] = &[];
pub(super) const Z4: &[Term] = &[];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
